mod errors;
mod logging;
mod root;
mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
pub use upstream::UpstreamConfig;
