//! cryptdns infrastructure layer
//!
//! hickory-proto wire translation, the resolver adapter behind the
//! `QueryResolver` port, the default notification adapter and the logging
//! bootstrap.

pub mod dns;
pub mod logging;
pub mod notify;

pub use dns::DnscryptResolver;
pub use notify::LogNotifier;
