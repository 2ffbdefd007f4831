//! Temporary location for the extracted clipboard bitmap.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const IMAGE_NAME: &str = "image.png";

/// Scoped temporary image path.
///
/// Each paste gets its own directory, removed with everything in it when
/// the value is dropped.
#[derive(Debug)]
pub struct ImageFile {
    dir: TempDir,
    path: PathBuf,
}

impl ImageFile {
    /// Creates a fresh directory under the system temp dir.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created.
    pub fn create() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("imgpaste-").tempdir()?;
        Ok(Self::in_dir(dir))
    }

    #[cfg(test)]
    pub fn create_in(parent: impl AsRef<Path>) -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("imgpaste-")
            .tempdir_in(parent)?;
        Ok(Self::in_dir(dir))
    }

    fn in_dir(dir: TempDir) -> Self {
        let path = dir.path().join(IMAGE_NAME);
        Self { dir, path }
    }

    /// Destination path handed to the extractor.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory owning the image.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
