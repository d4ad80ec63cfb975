use std::sync::Arc;

/// Opaque per-query connection token from the host pipeline.
///
/// Forwarded through the resolve path for correlation in logs; never
/// interpreted by this core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionContext {
    pub id: Arc<str>,
}

impl ConnectionContext {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for ConnectionContext {
    fn default() -> Self {
        Self { id: Arc::from("") }
    }
}
