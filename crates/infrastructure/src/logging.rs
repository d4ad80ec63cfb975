use cryptdns_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber from the logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call
/// more than once; later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    }
}
