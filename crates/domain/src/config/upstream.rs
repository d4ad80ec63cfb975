use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Stamp of the DNSCrypt server ("sdns://…"). Empty means no upstream
    /// is configured and every query answers "not ready".
    #[serde(default)]
    pub stamp: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            stamp: String::new(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}
