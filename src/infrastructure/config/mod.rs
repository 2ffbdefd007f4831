//! Application configuration.

/// Settings and defaults.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Configuration file storage.
pub mod storage;

pub use app_config::{AppConfig, ClipboardBackend, LogLevel};
pub use args::{CliArgs, Command};
pub use storage::{ConfigError, StorageManager};
