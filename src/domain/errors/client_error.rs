//! Upload client creation error types.

use thiserror::Error;

use super::{ApiError, StorageError};

/// Reasons no upload client could be built.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ClientError {
    #[error("client_id is required to upload a image to imgur")]
    MissingClientId,

    #[error("client_id and client_secret are required to authorize with imgur")]
    MissingClientCredentials,

    #[error("failed to generate an access token from the refresh token: {0}")]
    RefreshFailed(#[source] ApiError),

    #[error("authorization failed: {message}")]
    AuthorizationFailed { message: String },

    #[error("secure storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Creates authorization failed error.
    #[must_use]
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::AuthorizationFailed {
            message: message.into(),
        }
    }

    /// Returns whether the user is missing configuration rather than
    /// facing an authentication failure.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingClientId | Self::MissingClientCredentials)
    }
}
