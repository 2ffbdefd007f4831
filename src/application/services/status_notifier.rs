//! Renders upload status events into a single auto-clearing message.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::StatusEvents;
use crate::domain::UploadStatus;
use crate::domain::ports::{NotificationPort, StatusDisplayPort};

/// Delay before a finished upload's message disappears.
pub const CLEAR_DELAY: Duration = Duration::from_secs(5);

const UPLOADING_TEXT: &str = "Uploading image...";
const COMPLETED_PREFIX: &str = "Image upload completed: ";
const FAILED_TEXT: &str = "Failed to upload image";
const FAILED_NOTIFICATION_PREFIX: &str = "Failed to upload image to imgur: ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum DisplayState {
    Idle,
    Showing(String),
}

/// Last-write-wins status renderer.
///
/// Every event cancels a pending clear before it is applied.
pub struct StatusNotifier {
    display: Arc<dyn StatusDisplayPort>,
    notifications: Arc<dyn NotificationPort>,
    clear_after: Duration,
    state: Arc<Mutex<DisplayState>>,
    pending_clear: Option<JoinHandle<()>>,
}

impl StatusNotifier {
    /// Creates a notifier clearing after [`CLEAR_DELAY`].
    #[must_use]
    pub fn new(
        display: Arc<dyn StatusDisplayPort>,
        notifications: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            display,
            notifications,
            clear_after: CLEAR_DELAY,
            state: Arc::new(Mutex::new(DisplayState::Idle)),
            pending_clear: None,
        }
    }

    /// Returns whether nothing is shown.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self.state.lock() == DisplayState::Idle
    }

    /// Visible message, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &*self.state.lock() {
            DisplayState::Idle => None,
            DisplayState::Showing(text) => Some(text.clone()),
        }
    }

    /// Applies one event. Must run inside a Tokio runtime.
    pub fn handle(&mut self, event: &UploadStatus) {
        self.cancel_pending_clear();

        match event {
            UploadStatus::Uploading => {
                self.show(UPLOADING_TEXT);
            }
            UploadStatus::Succeeded { url } => {
                self.show(&format!("{COMPLETED_PREFIX}{url}"));
                self.schedule_clear();
            }
            UploadStatus::Failed { error } => {
                self.notifications
                    .error(&format!("{FAILED_NOTIFICATION_PREFIX}{error}"));
                self.show(FAILED_TEXT);
                self.schedule_clear();
            }
        }
    }

    /// Consumes events from `events` on a background task until every
    /// publisher is dropped.
    #[must_use]
    pub fn subscribe(self, events: &StatusEvents) -> JoinHandle<()> {
        let receiver = events.subscribe();
        tokio::spawn(self.run(receiver))
    }

    async fn run(mut self, mut receiver: broadcast::Receiver<UploadStatus>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.handle(&event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Status notifier fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }

        debug!("Status event bus closed");
        self.cancel_pending_clear();
        self.display.finish();
    }

    fn show(&self, text: &str) {
        *self.state.lock() = DisplayState::Showing(text.to_string());
        self.display.set_text(text);
    }

    fn schedule_clear(&mut self) {
        let display = Arc::clone(&self.display);
        let state = Arc::clone(&self.state);
        let delay = self.clear_after;

        self.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            *state.lock() = DisplayState::Idle;
            display.set_text("");
        }));
    }

    fn cancel_pending_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }
}

impl Drop for StatusNotifier {
    fn drop(&mut self) {
        self.cancel_pending_clear();
    }
}
