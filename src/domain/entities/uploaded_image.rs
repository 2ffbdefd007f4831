//! Hosted image metadata and the link text inserted into documents.

use serde::{Deserialize, Serialize};

/// Image accepted by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Host-side image id.
    pub id: String,
    /// Public URL.
    pub link: String,
    /// Token allowing anonymous deletion.
    pub deletehash: Option<String>,
}

impl UploadedImage {
    /// Creates image metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link: link.into(),
            deletehash: None,
        }
    }

    /// Sets the delete hash.
    #[must_use]
    pub fn with_deletehash(mut self, deletehash: Option<String>) -> Self {
        self.deletehash = deletehash;
        self
    }
}

/// Text written in place of the placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkFormat {
    /// `![Image](<url>)`.
    #[default]
    Markdown,
    /// The bare URL.
    Url,
}

impl LinkFormat {
    /// Renders the link for `url`.
    #[must_use]
    pub fn render(self, url: &str) -> String {
        match self {
            Self::Markdown => format!("![Image]({url})"),
            Self::Url => url.to_string(),
        }
    }
}
