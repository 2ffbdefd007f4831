//! Document editing error types.

use thiserror::Error;

use crate::domain::entities::Position;

/// Editor error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum EditorError {
    #[error("position {position} is outside the document")]
    OutOfBounds { position: Position },

    #[error("document is not backed by a saved file")]
    Untitled,

    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

impl EditorError {
    /// Creates out-of-bounds error.
    #[must_use]
    pub const fn out_of_bounds(position: Position) -> Self {
        Self::OutOfBounds { position }
    }
}
