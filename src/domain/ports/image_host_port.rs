//! Image hosting port.

use async_trait::async_trait;

use crate::domain::entities::{UploadAuth, UploadedImage};
use crate::domain::errors::ApiError;

/// Port for uploading images to the host.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageHostPort: Send + Sync {
    /// Uploads base64-encoded image bytes.
    async fn upload(&self, auth: &UploadAuth, image_base64: &str)
    -> Result<UploadedImage, ApiError>;
}
