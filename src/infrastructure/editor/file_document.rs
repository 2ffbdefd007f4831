//! Document backed by a file on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entities::{PlaceholderSpan, Position, TextBuffer};
use crate::domain::errors::EditorError;
use crate::domain::ports::EditorPort;

/// Edits a text file in place at a fixed cursor.
///
/// A path that does not exist yet is treated as an untitled document.
/// Every edit is written back before it is reported as applied.
pub struct FileDocument {
    path: PathBuf,
    buffer: Option<Mutex<TextBuffer>>,
    cursor: Position,
}

impl FileDocument {
    /// Opens `path` with the cursor at `cursor`, or at the end of the file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the cursor lies outside it.
    pub async fn open(
        path: impl Into<PathBuf>,
        cursor: Option<Position>,
    ) -> Result<Self, EditorError> {
        let path = path.into();

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Document does not exist yet");
                return Ok(Self {
                    path,
                    buffer: None,
                    cursor: Position::default(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let buffer = TextBuffer::new(text);
        let cursor = match cursor {
            Some(cursor) => {
                buffer.offset_of(cursor)?;
                cursor
            }
            None => buffer.end_position(),
        };

        debug!(path = %path.display(), %cursor, "Document opened");

        Ok(Self {
            path,
            buffer: Some(Mutex::new(buffer)),
            cursor,
        })
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current text, or `None` for an untitled document.
    pub async fn text(&self) -> Option<String> {
        match &self.buffer {
            Some(buffer) => Some(buffer.lock().await.as_str().to_string()),
            None => None,
        }
    }

    async fn apply<F>(&self, edit: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut TextBuffer) -> Result<(), EditorError> + Send,
    {
        let buffer = self.buffer.as_ref().ok_or(EditorError::Untitled)?;
        let mut buffer = buffer.lock().await;

        let mut next = buffer.clone();
        edit(&mut next)?;
        tokio::fs::write(&self.path, next.as_str()).await?;
        *buffer = next;

        Ok(())
    }
}

#[async_trait]
impl EditorPort for FileDocument {
    fn is_untitled(&self) -> bool {
        self.buffer.is_none()
    }

    fn selection_start(&self) -> Position {
        self.cursor
    }

    async fn insert(&self, at: Position, text: &str) -> Result<(), EditorError> {
        self.apply(|buffer| buffer.insert(at, text)).await
    }

    async fn replace(&self, span: PlaceholderSpan, text: &str) -> Result<(), EditorError> {
        self.apply(|buffer| buffer.replace(span, text)).await
    }

    async fn delete(&self, span: PlaceholderSpan) -> Result<(), EditorError> {
        self.apply(|buffer| buffer.delete(span)).await
    }
}
