use async_trait::async_trait;
use cryptdns_domain::{DomainError, ServerStamp, UpstreamSession};
use hickory_proto::op::Message;

/// Boundary to the DNSCrypt protocol engine.
///
/// Certificate fetch, validation and the encryption of individual exchanges
/// all live behind this trait; the resolver core only ever establishes a
/// session from a stamp and exchanges wire messages over it.
#[async_trait]
pub trait DnscryptClient: Send + Sync {
    /// Fetch and validate the server certificate for `stamp`, returning the
    /// established session. May block on network I/O.
    async fn dial(&self, stamp: &ServerStamp) -> Result<UpstreamSession, DomainError>;

    /// Perform one encrypted query/response exchange over `session`.
    async fn exchange(
        &self,
        query: Message,
        session: &UpstreamSession,
    ) -> Result<Message, DomainError>;
}
