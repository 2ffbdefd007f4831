//! Result of asking the clipboard for an image.

use std::path::PathBuf;

/// What the clipboard extractor found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// Image written to the given path.
    Saved(PathBuf),
    /// The clipboard holds something other than an image.
    NoImage,
    /// A helper command the platform needs is not installed.
    MissingDependency(String),
}

impl ClipboardOutcome {
    /// Path of the saved image, if any.
    #[must_use]
    pub fn saved_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Saved(path) => Some(path),
            Self::NoImage | Self::MissingDependency(_) => None,
        }
    }
}
