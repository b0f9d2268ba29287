use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{AppConfig, ConfigError};

/// Installs the global subscriber.
///
/// The terminal belongs to the UI, so events go to a log file. `RUST_LOG`
/// takes precedence over the configured level.
///
/// # Errors
/// Returns `ConfigError::Io` if the log file cannot be opened.
pub fn init_logging(config: &AppConfig) -> Result<Option<PathBuf>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let Some(log_path) = config.effective_log_path() else {
        tracing_subscriber::registry().with(filter).init();
        return Ok(None);
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "Logging initialized");

    Ok(Some(log_path))
}
