//! Domain error types.

mod api_error;
mod client_error;
mod clipboard_error;
mod editor_error;
mod paste_error;
mod storage_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use clipboard_error::ClipboardError;
pub use editor_error::EditorError;
pub use paste_error::PasteError;
pub use storage_error::StorageError;
