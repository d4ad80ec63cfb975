use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid server stamp: {0}")]
    InvalidStamp(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Upstream exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Failed to deliver notification: {0}")]
    NotificationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
