use crate::ports::{DnscryptClient, Notification, Notifier};
use arc_swap::ArcSwapOption;
use cryptdns_domain::{DomainError, ServerStamp, UpstreamSession};
use std::sync::Arc;
use tracing::{debug, info, warn};

const INVALID_STAMP_EVENT: &str = "dnscrypt-invalid-stamp";
const INVALID_STAMP_TITLE: &str = "DNSCrypt: server stamp invalid";

/// Owns the single active upstream session.
///
/// Readers snapshot the session wait-free; a configuration update replaces
/// it with one atomic pointer swap. The handshake itself runs outside any
/// critical section, so a slow or hanging dial never blocks in-flight
/// queries from reading the previously active session.
pub struct SessionManager {
    client: Arc<dyn DnscryptClient>,
    notifier: Arc<dyn Notifier>,
    active: ArcSwapOption<UpstreamSession>,
}

impl SessionManager {
    pub fn new(client: Arc<dyn DnscryptClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            active: ArcSwapOption::const_empty(),
        }
    }

    /// Attempt to build a new session from `stamp` and install it.
    ///
    /// An empty stamp is a no-op. A failed handshake leaves the last good
    /// session authoritative, surfaces the error text through the
    /// notification collaborator exactly once, and returns the dial error;
    /// callers treat that error as non-fatal.
    pub async fn apply_stamp(&self, stamp: &ServerStamp) -> Result<(), DomainError> {
        if stamp.is_empty() {
            debug!("Empty server stamp, keeping current session");
            return Ok(());
        }

        // Handshake runs before taking any exclusive section.
        let session = match self.client.dial(stamp).await {
            Ok(session) => session,
            Err(e) => {
                let notification = Notification::new(
                    INVALID_STAMP_EVENT,
                    INVALID_STAMP_TITLE,
                    e.to_string(),
                );
                if let Err(notify_err) = self.notifier.notify(&notification).await {
                    warn!(error = %notify_err, "Failed to deliver stamp notification");
                }
                return Err(e);
            }
        };

        info!(
            provider = %session.provider_name,
            server = %session.server_addr,
            "Installed new upstream session"
        );
        self.active.store(Some(Arc::new(session)));
        Ok(())
    }

    /// Snapshot of the active session, or `None` before the first
    /// successful handshake.
    pub fn current(&self) -> Option<Arc<UpstreamSession>> {
        self.active.load_full()
    }
}
