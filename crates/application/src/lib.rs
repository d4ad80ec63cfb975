//! cryptdns application layer
//!
//! Ports (trait boundaries to the protocol engine, the notification
//! collaborator and the host query pipeline), the session manager owning the
//! active upstream session, and the use cases wiring them together.

pub mod ports;
pub mod services;
pub mod use_cases;

pub use services::SessionManager;
