//! Token storage error types.

use thiserror::Error;

use crate::domain::entities::TokenKind;

/// Token storage error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("secure storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read {kind}: {message}")]
    Read { kind: TokenKind, message: String },

    #[error("failed to save {kind}: {message}")]
    Write { kind: TokenKind, message: String },

    #[error("failed to remove {kind}: {message}")]
    Remove { kind: TokenKind, message: String },
}

impl StorageError {
    /// Creates read error.
    #[must_use]
    pub fn read(kind: TokenKind, message: impl Into<String>) -> Self {
        Self::Read {
            kind,
            message: message.into(),
        }
    }

    /// Creates write error.
    #[must_use]
    pub fn write(kind: TokenKind, message: impl Into<String>) -> Self {
        Self::Write {
            kind,
            message: message.into(),
        }
    }

    /// Creates remove error.
    #[must_use]
    pub fn remove(kind: TokenKind, message: impl Into<String>) -> Self {
        Self::Remove {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_token_kind() {
        let err = StorageError::write(TokenKind::Refresh, "locked");
        assert_eq!(err.to_string(), "failed to save refresh_token: locked");
    }
}
