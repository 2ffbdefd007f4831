//! Upload status transitions.

/// Upload lifecycle event published once per transition of a paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    /// The placeholder is in place and the upload has started.
    Uploading,
    /// The image is hosted at `url`.
    Succeeded {
        /// Public link of the uploaded image.
        url: String,
    },
    /// The upload could not complete.
    Failed {
        /// Human-readable failure description.
        error: String,
    },
}

impl UploadStatus {
    /// Creates a success event.
    #[must_use]
    pub fn succeeded(url: impl Into<String>) -> Self {
        Self::Succeeded { url: url.into() }
    }

    /// Creates a failure event.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Returns whether this event ends a paste.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }
}
