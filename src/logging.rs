//! Logging System
//!
//! Structured logging via the `tracing` crate. Diagnostics go to stderr so
//! operational output and gcloud's own progress stay readable on stdout.

use crate::error::OptionsError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

/// Logging configuration, assembled from the CLI flags.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text (default: text)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Initialize the global subscriber once, before any other work.
/// `RUST_LOG` overrides the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), OptionsError> {
    let filter = if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::try_from_default_env().map_err(|e| e.to_string())
    } else {
        EnvFilter::try_new(&config.level).map_err(|e| e.to_string())
    }
    .map_err(OptionsError::Logging)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
    result.map_err(|e| OptionsError::Logging(e.to_string()))
}
