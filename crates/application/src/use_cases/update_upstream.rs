use crate::services::SessionManager;
use cryptdns_domain::ServerStamp;
use std::sync::Arc;
use tracing::warn;

/// Entry point for the configuration collaborator: applies each stamp value
/// as it arrives. A failed handshake is logged and already surfaced to the
/// user by the session manager, so it never propagates further.
pub struct UpdateUpstreamUseCase {
    sessions: Arc<SessionManager>,
}

impl UpdateUpstreamUseCase {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, stamp: &str) {
        let stamp = ServerStamp::new(stamp);
        if let Err(e) = self.sessions.apply_stamp(&stamp).await {
            warn!(error = %e, "Upstream stamp rejected, keeping previous session");
        }
    }
}
