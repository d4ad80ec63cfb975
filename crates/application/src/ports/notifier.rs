use async_trait::async_trait;
use cryptdns_domain::DomainError;

/// A user-facing alert forwarded to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event_id: &'static str,
    pub title: &'static str,
    pub message: String,
}

impl Notification {
    pub fn new(event_id: &'static str, title: &'static str, message: String) -> Self {
        Self {
            event_id,
            title,
            message,
        }
    }
}

/// Fire-and-forget notification delivery. A delivery failure is logged by
/// the caller and never escalated.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError>;
}
