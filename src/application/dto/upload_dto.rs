//! Upload DTOs.

use std::sync::Arc;

use crate::domain::entities::{Credential, LinkFormat, Position, UploadAuth, UploadedImage};
use crate::domain::errors::ApiError;
use crate::domain::ports::ImageHostPort;

/// Whose account receives the upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadMode {
    /// Anonymous upload identified by the client id.
    #[default]
    Anonymous,
    /// Upload into the authorized user's account.
    User,
}

impl UploadMode {
    /// Maps the `prefer_user_upload` setting.
    #[must_use]
    pub const fn from_preference(prefer_user_upload: bool) -> Self {
        if prefer_user_upload {
            Self::User
        } else {
            Self::Anonymous
        }
    }

    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for UploadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Settings read at paste time.
#[derive(Debug, Clone, Default)]
pub struct UploadSettings {
    /// Anonymous or user upload.
    pub mode: UploadMode,
    /// Configured client id, secret, and optional access token.
    pub credential: Credential,
    /// How the final link is written.
    pub link_format: LinkFormat,
}

impl UploadSettings {
    /// Creates settings.
    #[must_use]
    pub fn new(mode: UploadMode, credential: Credential) -> Self {
        Self {
            mode,
            credential,
            link_format: LinkFormat::Markdown,
        }
    }

    /// Sets the link format.
    #[must_use]
    pub fn with_link_format(mut self, link_format: LinkFormat) -> Self {
        self.link_format = link_format;
        self
    }
}

/// Authenticated handle on the image host.
#[derive(Clone)]
pub struct UploadClient {
    auth: UploadAuth,
    host: Arc<dyn ImageHostPort>,
}

impl UploadClient {
    /// Creates a client.
    #[must_use]
    pub fn new(auth: UploadAuth, host: Arc<dyn ImageHostPort>) -> Self {
        Self { auth, host }
    }

    /// Authorization the client sends.
    #[must_use]
    pub const fn auth(&self) -> &UploadAuth {
        &self.auth
    }

    /// Uploads base64-encoded image bytes.
    ///
    /// # Errors
    /// Returns error if the host rejects the upload or cannot be reached.
    pub async fn upload(&self, image_base64: &str) -> Result<UploadedImage, ApiError> {
        self.host.upload(&self.auth, image_base64).await
    }
}

impl std::fmt::Debug for UploadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadClient")
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

/// Successful paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Uploaded image.
    pub image: UploadedImage,
    /// Text that replaced the placeholder.
    pub inserted: String,
    /// Where the text starts.
    pub position: Position,
}
