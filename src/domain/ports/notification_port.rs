/// Port for user-facing messages.
pub trait NotificationPort: Send + Sync {
    /// Shows an informational message.
    fn info(&self, message: &str);

    /// Shows an error message.
    fn error(&self, message: &str);
}
