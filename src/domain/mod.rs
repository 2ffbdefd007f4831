//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{ClipboardOutcome, Credential, PlaceholderSpan, Position, UploadStatus};
pub use errors::{ApiError, ClientError, ClipboardError, EditorError, PasteError, StorageError};
pub use ports::{
    ClipboardPort, EditorPort, ImageHostPort, NotificationPort, OAuthPort, PromptPort,
    StatusDisplayPort, TokenStoragePort,
};
