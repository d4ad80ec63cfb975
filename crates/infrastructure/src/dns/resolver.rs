//! Resolve operation
//!
//! Adapter behind the `QueryResolver` port: snapshots the active upstream
//! session, performs one encrypted exchange through the protocol engine and
//! translates the answer back into the generic response shape. One linear
//! attempt per call; no retry, no fallback upstream.

use crate::dns::forwarding::{AnswerMapper, QueryBuilder};
use async_trait::async_trait;
use cryptdns_application::ports::{DnscryptClient, QueryResolver, ResolveOutcome};
use cryptdns_application::SessionManager;
use cryptdns_domain::{ConnectionContext, DnsAnswer, DnsQuestion, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct DnscryptResolver {
    sessions: Arc<SessionManager>,
    client: Arc<dyn DnscryptClient>,
    query_timeout: Duration,
}

impl DnscryptResolver {
    pub fn new(
        sessions: Arc<SessionManager>,
        client: Arc<dyn DnscryptClient>,
        query_timeout_ms: u64,
    ) -> Self {
        Self {
            sessions,
            client,
            query_timeout: Duration::from_millis(query_timeout_ms),
        }
    }
}

#[async_trait]
impl QueryResolver for DnscryptResolver {
    async fn resolve(
        &self,
        question: &DnsQuestion,
        ctx: &ConnectionContext,
        cancel: &CancellationToken,
    ) -> Result<ResolveOutcome, DomainError> {
        // The snapshot stays valid for the whole exchange even if a
        // configuration update swaps the active session underneath us.
        let Some(session) = self.sessions.current() else {
            return Ok(ResolveOutcome::NotConfigured);
        };

        let query = QueryBuilder::build(question)?;

        debug!(
            domain = %question.name,
            qtype = question.qtype,
            server = %session.server_addr,
            conn = %ctx.id,
            "Forwarding query to DNSCrypt upstream"
        );

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
            result = tokio::time::timeout(
                self.query_timeout,
                self.client.exchange(query, &session),
            ) => result.map_err(|_| DomainError::QueryTimeout)??,
        };

        let records = AnswerMapper::map(response.answers());
        let answer = DnsAnswer::new(u16::from(response.response_code()), records);

        Ok(ResolveOutcome::Resolved(answer))
    }
}
