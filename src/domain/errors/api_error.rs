//! Imgur API error types.

use thiserror::Error;

/// Status code Imgur answers with for invalid or expired credentials.
pub const AUTHORIZATION_FAILURE_STATUS: u16 = 403;

/// Imgur API error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("imgur responded with HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error while contacting imgur: {message}")]
    Network { message: String },

    #[error("unexpected response from imgur: {message}")]
    InvalidResponse { message: String },
}

impl ApiError {
    /// Creates status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// HTTP status carried by the error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { .. } | Self::InvalidResponse { .. } => None,
        }
    }

    /// Returns whether the credentials were rejected.
    #[must_use]
    pub const fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: AUTHORIZATION_FAILURE_STATUS,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_forbidden_is_authorization_failure() {
        assert!(ApiError::status(403, "Permission denied").is_authorization());
        assert!(!ApiError::status(400, "Bad request").is_authorization());
        assert!(!ApiError::status(500, "Internal").is_authorization());
        assert!(!ApiError::network("timeout").is_authorization());
    }

    #[test]
    fn test_status_code() {
        assert_eq!(ApiError::status(429, "slow down").status_code(), Some(429));
        assert_eq!(ApiError::invalid_response("bad json").status_code(), None);
    }
}
