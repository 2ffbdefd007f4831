//! In-memory document text addressed by line/character positions.

use super::{PlaceholderSpan, Position};
use crate::domain::errors::EditorError;

/// Plain-text document body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Creates a buffer holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the full text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Position just past the last character.
    #[must_use]
    pub fn end_position(&self) -> Position {
        let line = self.text.matches('\n').count();
        let last_line = self.text.rsplit('\n').next().unwrap_or_default();
        Position::new(line, last_line.chars().count())
    }

    /// Byte offset of `position`.
    ///
    /// # Errors
    /// Returns `EditorError::OutOfBounds` when the line does not exist or
    /// the character lies past the end of the line.
    pub fn offset_of(&self, position: Position) -> Result<usize, EditorError> {
        let out_of_bounds = || EditorError::out_of_bounds(position);

        let mut line_start = 0;
        for _ in 0..position.line {
            let newline = self.text[line_start..].find('\n').ok_or_else(out_of_bounds)?;
            line_start += newline + 1;
        }

        let line = &self.text[line_start..];
        let line = line.split('\n').next().unwrap_or_default();
        let line = line.strip_suffix('\r').unwrap_or(line);

        if position.character == line.chars().count() {
            return Ok(line_start + line.len());
        }

        line.char_indices()
            .nth(position.character)
            .map(|(offset, _)| line_start + offset)
            .ok_or_else(out_of_bounds)
    }

    /// Inserts `text` at `position`.
    ///
    /// # Errors
    /// Returns error if the position is outside the document.
    pub fn insert(&mut self, position: Position, text: &str) -> Result<(), EditorError> {
        let offset = self.offset_of(position)?;
        self.text.insert_str(offset, text);
        Ok(())
    }

    /// Replaces the text covered by `span` with `text`.
    ///
    /// # Errors
    /// Returns error if the span is outside the document.
    pub fn replace(&mut self, span: PlaceholderSpan, text: &str) -> Result<(), EditorError> {
        let start = self.offset_of(span.start)?;
        let end = self.offset_of(span.end)?;
        if end < start {
            return Err(EditorError::out_of_bounds(span.end));
        }
        self.text.replace_range(start..end, text);
        Ok(())
    }

    /// Deletes the text covered by `span`.
    ///
    /// # Errors
    /// Returns error if the span is outside the document.
    pub fn delete(&mut self, span: PlaceholderSpan) -> Result<(), EditorError> {
        self.replace(span, "")
    }

    #[cfg(test)]
    pub fn slice(&self, span: PlaceholderSpan) -> Result<&str, EditorError> {
        let start = self.offset_of(span.start)?;
        let end = self.offset_of(span.end)?;
        self.text
            .get(start..end)
            .ok_or_else(|| EditorError::out_of_bounds(span.end))
    }
}
