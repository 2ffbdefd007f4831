//! Broadcast bus carrying upload status transitions.

use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::UploadStatus;

const DEFAULT_CAPACITY: usize = 16;

/// Publish side of the upload status bus.
#[derive(Debug, Clone)]
pub struct StatusEvents {
    sender: broadcast::Sender<UploadStatus>,
}

impl Default for StatusEvents {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl StatusEvents {
    /// Creates a bus buffering up to `capacity` events per subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to every subscriber.
    pub fn fire(&self, status: UploadStatus) {
        debug!(?status, "Upload status changed");
        if self.sender.send(status).is_err() {
            debug!("No status subscribers");
        }
    }

    /// Subscribes to future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<UploadStatus> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_events_in_order() {
        let events = StatusEvents::default();
        let mut rx = events.subscribe();

        events.fire(UploadStatus::Uploading);
        events.fire(UploadStatus::succeeded("https://i.imgur.com/a.png"));

        assert_eq!(rx.recv().await.unwrap(), UploadStatus::Uploading);
        assert_eq!(
            rx.recv().await.unwrap(),
            UploadStatus::succeeded("https://i.imgur.com/a.png")
        );
    }

    #[test]
    fn test_fire_without_subscribers_is_harmless() {
        let events = StatusEvents::default();
        events.fire(UploadStatus::Uploading);
    }
}
