use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Installs the global fmt subscriber. Call once per process.
pub fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
