//! Clipboard extraction error types.

use thiserror::Error;

/// Clipboard extraction error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ClipboardError {
    #[error("failed to launch clipboard helper `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard helper `{program}` printed nothing")]
    EmptyOutput { program: String },

    #[error("failed to prepare clipboard helper script: {0}")]
    Script(#[source] std::io::Error),

    #[error("failed to access clipboard: {message}")]
    Access { message: String },

    #[error("failed to encode clipboard image: {message}")]
    Encode { message: String },
}

impl ClipboardError {
    /// Creates spawn error.
    #[must_use]
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Creates access error.
    #[must_use]
    pub fn access(message: impl Into<String>) -> Self {
        Self::Access {
            message: message.into(),
        }
    }

    /// Creates encode error.
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }
}
