//! Adapters for the clipboard, Imgur, the keyring, files, and configuration.

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod imgur;
pub mod notifications;
pub mod storage;

pub use clipboard::{NativeClipboard, ScriptClipboard};
pub use config::{AppConfig, CliArgs, StorageManager};
pub use editor::FileDocument;
pub use imgur::ImgurClient;
pub use notifications::DesktopNotificationService;
pub use storage::KeyringTokenStorage;
