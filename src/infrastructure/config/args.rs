//! Command-line arguments.

use super::app_config::{ClipboardBackend, LogLevel};
use crate::domain::entities::LinkFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments; `Some` values override the config file.
#[derive(Debug, Parser)]
#[command(
    name = "imgpaste",
    version,
    about = "Paste the clipboard image into a document as an Imgur link",
    long_about = None
)]
pub struct CliArgs {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Imgur application client id.
    #[arg(long, env = "IMGUR_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// Imgur application client secret.
    #[arg(long, env = "IMGUR_CLIENT_SECRET", hide_env_values = true, global = true)]
    pub client_secret: Option<String>,

    /// Upload to the authorized account instead of anonymously.
    #[arg(long, global = true)]
    pub prefer_user_upload: Option<bool>,

    /// Inserted link format.
    #[arg(long, value_enum, global = true)]
    pub link_format: Option<LinkFormat>,

    /// Clipboard reader.
    #[arg(long, value_enum, global = true)]
    pub clipboard_backend: Option<ClipboardBackend>,

    /// Mirror messages as desktop notifications.
    #[arg(long, global = true)]
    pub desktop_notifications: Option<bool>,
}

/// Commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload the clipboard image and insert its link into FILE.
    Paste {
        /// Document to edit. Must already exist.
        file: PathBuf,

        /// 1-based line of the insertion point (default: end of file).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        line: Option<u32>,

        /// 1-based column of the insertion point (default: 1 when --line is given).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..), requires = "line")]
        column: Option<u32>,
    },

    /// Forget the stored Imgur tokens.
    Logout,

    /// Print the configuration file path.
    ConfigPath,
}
