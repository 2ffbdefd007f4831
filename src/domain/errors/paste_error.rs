//! Paste workflow error types.

use thiserror::Error;

use super::{ApiError, ClientError, ClipboardError, EditorError};

/// Terminal outcome of a paste that did not produce a link.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PasteError {
    #[error("no active editor")]
    NoActiveEditor,

    #[error("the document must be saved before pasting an image")]
    UntitledDocument,

    #[error("copied object is not an image")]
    NoImage,

    #[error("required command `{0}` is not installed")]
    MissingDependency(String),

    #[error("failed to create temporary image file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("clipboard extraction failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to read clipboard image: {0}")]
    ImageRead(#[source] std::io::Error),

    #[error(transparent)]
    Upload(#[from] ApiError),

    #[error("failed to edit document: {0}")]
    Editor(#[from] EditorError),
}

impl PasteError {
    /// Returns whether the failure is a precondition or extraction
    /// outcome reported as information rather than an error.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        match self {
            Self::NoActiveEditor
            | Self::UntitledDocument
            | Self::NoImage
            | Self::MissingDependency(_) => true,
            Self::Client(e) => e.is_configuration(),
            Self::TempFile(_)
            | Self::Clipboard(_)
            | Self::ImageRead(_)
            | Self::Upload(_)
            | Self::Editor(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_failures_are_informational() {
        assert!(PasteError::NoActiveEditor.is_informational());
        assert!(PasteError::UntitledDocument.is_informational());
        assert!(PasteError::NoImage.is_informational());
        assert!(PasteError::MissingDependency("xclip".to_string()).is_informational());
        assert!(PasteError::Client(ClientError::MissingClientId).is_informational());
    }

    #[test]
    fn test_upload_failures_are_errors() {
        let err = PasteError::from(ApiError::status(403, "forbidden"));
        assert!(!err.is_informational());
        assert!(!PasteError::Client(ClientError::authorization("bad pin")).is_informational());
    }
}
