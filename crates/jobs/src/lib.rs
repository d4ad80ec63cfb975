//! cryptdns background jobs
//!
//! Long-lived tasks tied to process lifetime, cancelled through a shared
//! `CancellationToken` at shutdown.

pub mod stamp_watch;

pub use stamp_watch::StampWatchJob;
