//! Domain entities.

mod clipboard_outcome;
mod credential;
mod image_file;
mod placeholder;
mod text_buffer;
mod upload_status;
mod uploaded_image;

pub use clipboard_outcome::ClipboardOutcome;
pub use credential::{Credential, SecretToken, TokenKind, TokenPair, UploadAuth};
pub use image_file::ImageFile;
pub use placeholder::{PLACEHOLDER, PlaceholderSpan, Position};
pub use text_buffer::TextBuffer;
pub use upload_status::UploadStatus;
pub use uploaded_image::{LinkFormat, UploadedImage};
