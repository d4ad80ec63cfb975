use crate::ports::{QueryResolver, ResolveOutcome};
use cryptdns_domain::{ConnectionContext, DnsQuestion, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Entry point for the host query pipeline: one call per inbound query.
pub struct ResolveQueryUseCase {
    resolver: Arc<dyn QueryResolver>,
}

impl ResolveQueryUseCase {
    pub fn new(resolver: Arc<dyn QueryResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        question: &DnsQuestion,
        ctx: &ConnectionContext,
        cancel: &CancellationToken,
    ) -> Result<ResolveOutcome, DomainError> {
        let start = Instant::now();

        let outcome = self.resolver.resolve(question, ctx, cancel).await?;

        match &outcome {
            ResolveOutcome::Resolved(answer) => {
                debug!(
                    domain = %question.name,
                    qtype = question.qtype,
                    rcode = answer.rcode,
                    records = answer.records.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Query resolved"
                );
            }
            ResolveOutcome::NotConfigured => {
                debug!(
                    domain = %question.name,
                    "No upstream session configured, returning empty result"
                );
            }
        }

        Ok(outcome)
    }
}
