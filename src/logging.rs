//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{BloomError, BloomResult};

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LogConfig) -> BloomResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| BloomError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}
