mod dnscrypt_client;
mod notifier;
mod query_resolver;

pub use dnscrypt_client::DnscryptClient;
pub use notifier::{Notification, Notifier};
pub use query_resolver::{QueryResolver, ResolveOutcome};
