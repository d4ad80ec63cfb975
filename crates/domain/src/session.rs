use super::ServerStamp;

/// The result of a successful DNSCrypt handshake with one upstream server.
///
/// Immutable once created; the protocol engine keeps the key material and
/// certificate internally, keyed by the stamp. At most one session is active
/// at any instant, held by the session manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamSession {
    pub stamp: ServerStamp,
    pub provider_name: String,
    pub server_addr: String,
}

impl UpstreamSession {
    pub fn new(stamp: ServerStamp, provider_name: String, server_addr: String) -> Self {
        Self {
            stamp,
            provider_name,
            server_addr,
        }
    }
}
