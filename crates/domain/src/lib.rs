//! cryptdns domain layer
//!
//! Entities shared by every other crate: the generic DNS question/record
//! shapes exchanged with the host query pipeline, the upstream session
//! produced by a DNSCrypt handshake, and the configuration types.

pub mod config;
pub mod connection;
pub mod dns_answer;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod server_stamp;
pub mod session;

pub use config::{Config, ConfigError, LoggingConfig, UpstreamConfig};
pub use connection::ConnectionContext;
pub use dns_answer::DnsAnswer;
pub use dns_question::DnsQuestion;
pub use dns_record::{rr_type, DnsRecord};
pub use errors::DomainError;
pub use server_stamp::ServerStamp;
pub use session::UpstreamSession;
