//! Text editor port.

use async_trait::async_trait;

use crate::domain::entities::{PlaceholderSpan, Position};
use crate::domain::errors::EditorError;

/// Port for the active text editor and its document.
///
/// Edits on one document are applied in call order.
#[async_trait]
pub trait EditorPort: Send + Sync {
    /// Returns whether the document has never been saved.
    fn is_untitled(&self) -> bool;

    /// Start of the current selection (the cursor when nothing is selected).
    fn selection_start(&self) -> Position;

    /// Inserts `text` at `at`.
    async fn insert(&self, at: Position, text: &str) -> Result<(), EditorError>;

    /// Replaces the text covered by `span`.
    async fn replace(&self, span: PlaceholderSpan, text: &str) -> Result<(), EditorError>;

    /// Deletes the text covered by `span`.
    async fn delete(&self, span: PlaceholderSpan) -> Result<(), EditorError>;
}
