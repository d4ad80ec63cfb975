use std::fmt;
use std::sync::Arc;

/// An opaque DNSCrypt server stamp ("sdns://…").
///
/// The stamp is decoded and validated by the protocol engine during the
/// handshake; this type only distinguishes "empty, no upstream configured"
/// from "something to try dialing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStamp(Arc<str>);

impl ServerStamp {
    pub fn new(stamp: impl Into<Arc<str>>) -> Self {
        Self(stamp.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServerStamp {
    fn from(stamp: &str) -> Self {
        Self::new(stamp)
    }
}

impl From<String> for ServerStamp {
    fn from(stamp: String) -> Self {
        Self::new(stamp)
    }
}

impl fmt::Display for ServerStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
