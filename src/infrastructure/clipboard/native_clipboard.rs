//! In-process clipboard access through `arboard`.

use std::path::Path;

use arboard::Clipboard;
use async_trait::async_trait;
use image::{ImageFormat, RgbaImage};
use tracing::{debug, warn};

use crate::domain::entities::ClipboardOutcome;
use crate::domain::errors::ClipboardError;
use crate::domain::ports::ClipboardPort;

/// Reads the clipboard bitmap directly and encodes it as PNG.
#[derive(Debug, Clone, Default)]
pub struct NativeClipboard {}

impl NativeClipboard {
    /// Creates the extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ClipboardPort for NativeClipboard {
    async fn save_image(&self, destination: &Path) -> Result<ClipboardOutcome, ClipboardError> {
        let destination = destination.to_path_buf();

        tokio::task::spawn_blocking(move || save_clipboard_png(&destination))
            .await
            .map_err(|e| ClipboardError::access(format!("clipboard task failed: {e}")))?
    }
}

fn save_clipboard_png(destination: &Path) -> Result<ClipboardOutcome, ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| {
        warn!("Failed to initialize clipboard for image read: {}", e);
        ClipboardError::access(e.to_string())
    })?;

    let image = match clipboard.get_image() {
        Ok(image) => image,
        Err(arboard::Error::ContentNotAvailable) => {
            debug!("Clipboard holds no image");
            return Ok(ClipboardOutcome::NoImage);
        }
        Err(e) => {
            warn!("Failed to get clipboard image: {}", e);
            return Err(ClipboardError::access(e.to_string()));
        }
    };

    write_png(
        destination,
        image.width,
        image.height,
        image.bytes.into_owned(),
    )
}

fn write_png(
    destination: &Path,
    width: usize,
    height: usize,
    rgba: Vec<u8>,
) -> Result<ClipboardOutcome, ClipboardError> {
    let width = u32::try_from(width).map_err(|_| ClipboardError::encode("image too wide"))?;
    let height = u32::try_from(height).map_err(|_| ClipboardError::encode("image too tall"))?;

    let buffer = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ClipboardError::encode("pixel buffer does not match image size"))?;

    buffer
        .save_with_format(destination, ImageFormat::Png)
        .map_err(|e| ClipboardError::encode(e.to_string()))?;

    debug!(width, height, path = %destination.display(), "Clipboard image saved");
    Ok(ClipboardOutcome::Saved(destination.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        let pixels = vec![255, 0, 0, 255, 0, 0, 255, 255];

        let outcome = write_png(&path, 2, 1, pixels).unwrap();

        assert_eq!(outcome, ClipboardOutcome::Saved(path.clone()));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_write_png_rejects_short_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");

        let result = write_png(&path, 4, 4, vec![0; 3]);

        assert!(matches!(result, Err(ClipboardError::Encode { .. })));
        assert!(!path.exists());
    }
}
