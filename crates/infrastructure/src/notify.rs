use async_trait::async_trait;
use cryptdns_application::ports::{Notification, Notifier};
use cryptdns_domain::DomainError;
use tracing::warn;

/// Default `Notifier` adapter: renders alerts into the log stream.
///
/// Desktop or UI delivery belongs to the host; when it wires its own
/// adapter this one drops out of the composition.
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError> {
        warn!(
            event_id = notification.event_id,
            title = notification.title,
            message = %notification.message,
            "User notification"
        );
        Ok(())
    }
}
