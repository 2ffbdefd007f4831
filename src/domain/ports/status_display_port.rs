//! Single-line status display port.

/// Port for the one visible upload status message.
pub trait StatusDisplayPort: Send + Sync {
    /// Replaces the visible text. An empty string hides the message.
    fn set_text(&self, text: &str);

    /// Called once when the display is torn down.
    fn finish(&self) {}
}
