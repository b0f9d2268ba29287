//! Infrastructure layer with configuration and logging adapters.

/// Application configuration.
pub mod config;
/// Log file setup.
pub mod logging;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigSource, LogLevel, StorageManager};
pub use logging::init_logging;
