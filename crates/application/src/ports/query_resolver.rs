use async_trait::async_trait;
use cryptdns_domain::{ConnectionContext, DnsAnswer, DnsQuestion, DomainError};
use tokio_util::sync::CancellationToken;

/// Outcome of one resolve attempt.
///
/// "Not configured" is a defined result, not an error: no upstream session
/// has ever been established, so the host pipeline should fall through to
/// whatever it does for an unavailable resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved(DnsAnswer),
    NotConfigured,
}

impl ResolveOutcome {
    pub fn answer(&self) -> Option<&DnsAnswer> {
        match self {
            Self::Resolved(answer) => Some(answer),
            Self::NotConfigured => None,
        }
    }
}

/// Inbound boundary called by the host query pipeline, one call per query.
#[async_trait]
pub trait QueryResolver: Send + Sync {
    async fn resolve(
        &self,
        question: &DnsQuestion,
        ctx: &ConnectionContext,
        cancel: &CancellationToken,
    ) -> Result<ResolveOutcome, DomainError>;
}
