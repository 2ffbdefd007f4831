//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::application::dto::{UploadMode, UploadSettings};
use crate::domain::entities::{Credential, LinkFormat, SecretToken};

pub(crate) const APP_NAME: &str = "imgpaste";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

const DEFAULT_API_BASE_URL: &str = "https://api.imgur.com";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// How the clipboard image is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Platform helper script (xclip, osascript, powershell).
    #[default]
    Script,
    /// In-process clipboard access.
    Native,
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Imgur application client id.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Imgur application client secret.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Upload to the authorized account instead of anonymously.
    #[serde(default)]
    pub prefer_user_upload: bool,

    /// Text inserted for an uploaded image.
    #[serde(default)]
    pub link_format: LinkFormat,

    /// Clipboard reader.
    #[serde(default)]
    pub clipboard_backend: ClipboardBackend,

    /// Directory with replacement helper scripts.
    #[serde(default)]
    pub scripts_dir: Option<PathBuf>,

    /// Mirror messages as desktop notifications.
    #[serde(default = "default_true")]
    pub desktop_notifications: bool,

    /// Imgur API endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_true() -> bool {
    true
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(client_id) = &args.client_id {
            self.client_id = Some(client_id.clone());
        }
        if let Some(client_secret) = &args.client_secret {
            self.client_secret = Some(client_secret.clone());
        }
        if let Some(prefer_user_upload) = args.prefer_user_upload {
            self.prefer_user_upload = prefer_user_upload;
        }
        if let Some(link_format) = args.link_format {
            self.link_format = link_format;
        }
        if let Some(backend) = args.clipboard_backend {
            self.clipboard_backend = backend;
        }
        if let Some(notifications) = args.desktop_notifications {
            self.desktop_notifications = notifications;
        }
    }

    /// Upload settings derived from this configuration.
    #[must_use]
    pub fn upload_settings(&self) -> UploadSettings {
        let credential = Credential::new(self.client_id.clone())
            .with_client_secret(self.client_secret.clone().and_then(SecretToken::new));

        UploadSettings::new(
            UploadMode::from_preference(self.prefer_user_upload),
            credential,
        )
        .with_link_format(self.link_format)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("imgpaste.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            client_id: None,
            client_secret: None,
            prefer_user_upload: false,
            link_format: LinkFormat::default(),
            clipboard_backend: ClipboardBackend::default(),
            scripts_dir: None,
            desktop_notifications: true,
            api_base_url: default_api_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            client_id = "abc"
            client_secret = "shh"
            prefer_user_upload = true
            link_format = "url"
            clipboard_backend = "native"
            desktop_notifications = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.client_id.as_deref(), Some("abc"));
        assert!(config.prefer_user_upload);
        assert_eq!(config.link_format, LinkFormat::Url);
        assert_eq!(config.clipboard_backend, ClipboardBackend::Native);
        assert!(!config.desktop_notifications);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.client_id, None);
        assert!(!config.prefer_user_upload);
        assert!(config.desktop_notifications);
        assert_eq!(config.clipboard_backend, ClipboardBackend::Script);
    }

    #[test]
    fn test_merge_with_args_overrides_file_values() {
        let mut config = AppConfig {
            client_id: Some("from-file".into()),
            ..AppConfig::default()
        };
        let args = CliArgs::parse_from([
            "imgpaste",
            "--client-id",
            "from-cli",
            "--prefer-user-upload",
            "true",
            "--log-level",
            "debug",
            "logout",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.client_id.as_deref(), Some("from-cli"));
        assert!(config.prefer_user_upload);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_upload_settings_drop_blank_secrets() {
        let config = AppConfig {
            client_id: Some("abc".into()),
            client_secret: Some("  ".into()),
            prefer_user_upload: true,
            ..AppConfig::default()
        };

        let settings = config.upload_settings();

        assert_eq!(settings.mode, UploadMode::User);
        assert_eq!(settings.credential.client_id.as_deref(), Some("abc"));
        assert!(settings.credential.client_secret.is_none());
        assert!(settings.credential.access_token.is_none());
    }
}
