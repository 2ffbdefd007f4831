//! Document positions and the placeholder span inserted while uploading.

use std::fmt;

/// Markdown shown in the document while the upload is in flight.
pub const PLACEHOLDER: &str = "![uploading...](http://i.imgur.com/uploading.png)";

/// Zero-based line/character position, characters counted as Unicode scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line index.
    pub line: usize,
    /// Character index within the line.
    pub character: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Returns a position shifted by the given deltas.
    #[must_use]
    pub const fn translate(self, line_delta: usize, character_delta: usize) -> Self {
        Self {
            line: self.line + line_delta,
            character: self.character + character_delta,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Start/end pair marking where the placeholder text sits.
///
/// The span never crosses a line because the placeholder is single-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpan {
    /// First character of the placeholder.
    pub start: Position,
    /// Position just past the placeholder.
    pub end: Position,
}

impl PlaceholderSpan {
    /// Span covering `text` once inserted at `start`.
    #[must_use]
    pub fn at(start: Position, text: &str) -> Self {
        Self {
            start,
            end: start.translate(0, text.chars().count()),
        }
    }

    /// Span of the standard upload placeholder.
    #[must_use]
    pub fn placeholder_at(start: Position) -> Self {
        Self::at(start, PLACEHOLDER)
    }

    /// Character length of the span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.character - self.start.character
    }

    /// Returns whether the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for PlaceholderSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
