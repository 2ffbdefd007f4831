mod clipboard_port;
mod editor_port;
mod image_host_port;
mod notification_port;
mod oauth_port;
mod prompt_port;
mod status_display_port;
mod token_storage_port;

pub use clipboard_port::ClipboardPort;
pub use editor_port::EditorPort;
pub use image_host_port::ImageHostPort;
pub use notification_port::NotificationPort;
pub use oauth_port::OAuthPort;
pub use prompt_port::PromptPort;
pub use status_display_port::StatusDisplayPort;
pub use token_storage_port::TokenStoragePort;
