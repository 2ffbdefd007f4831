//! Clipboard image extraction port.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::entities::ClipboardOutcome;
use crate::domain::errors::ClipboardError;

/// Port for saving the clipboard image to disk.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Writes the clipboard image to `destination`, or reports why it could not.
    async fn save_image(&self, destination: &Path) -> Result<ClipboardOutcome, ClipboardError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Contents {
        Image(Vec<u8>),
        Text,
        MissingXclip,
        Broken,
    }

    /// Mock clipboard for testing.
    pub struct MockClipboard {
        contents: Contents,
        calls: AtomicUsize,
    }

    impl MockClipboard {
        fn with(contents: Contents) -> Self {
            Self {
                contents,
                calls: AtomicUsize::new(0),
            }
        }

        /// Clipboard holding image bytes.
        pub fn with_image(bytes: &[u8]) -> Self {
            Self::with(Contents::Image(bytes.to_vec()))
        }

        /// Clipboard holding text.
        pub fn with_text() -> Self {
            Self::with(Contents::Text)
        }

        /// Linux host without xclip.
        pub fn missing_xclip() -> Self {
            Self::with(Contents::MissingXclip)
        }

        /// Helper that cannot be launched.
        pub fn broken() -> Self {
            Self::with(Contents::Broken)
        }

        /// Number of extraction requests.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ClipboardPort for MockClipboard {
        async fn save_image(
            &self,
            destination: &Path,
        ) -> Result<ClipboardOutcome, ClipboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.contents {
                Contents::Image(bytes) => {
                    std::fs::write(destination, bytes).map_err(ClipboardError::Script)?;
                    Ok(ClipboardOutcome::Saved(destination.to_path_buf()))
                }
                Contents::Text => Ok(ClipboardOutcome::NoImage),
                Contents::MissingXclip => Ok(ClipboardOutcome::MissingDependency("xclip".into())),
                Contents::Broken => Err(ClipboardError::spawn(
                    "sh",
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                )),
            }
        }
    }
}
