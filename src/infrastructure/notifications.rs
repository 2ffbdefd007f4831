//! Desktop notifications.

use notify_rust::Notification;

use crate::domain::ports::NotificationPort;

const APP_NAME: &str = "imgpaste";

/// Desktop notification service.
#[derive(Debug, Clone, Default)]
pub struct DesktopNotificationService {
    enabled: bool,
}

impl DesktopNotificationService {
    /// Creates service; a disabled one drops every message.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether notifications are shown at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn send(&self, summary: &'static str, body: &str) {
        if !self.enabled {
            return;
        }

        let body = body.to_string();

        // Needs a runtime; messages sent outside one are dropped.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime for desktop notification");
            return;
        };

        handle.spawn_blocking(move || {
            if let Err(e) = Notification::new()
                .summary(summary)
                .body(&body)
                .appname(APP_NAME)
                .show()
            {
                tracing::warn!("Failed to show notification: {}", e);
            }
        });
    }
}

impl NotificationPort for DesktopNotificationService {
    fn info(&self, message: &str) {
        self.send("Imgur", message);
    }

    fn error(&self, message: &str) {
        self.send("Imgur upload failed", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_service_sends_nothing() {
        let service = DesktopNotificationService::new(false);

        assert!(!service.is_enabled());
        service.info("ignored");
        service.error("ignored");
    }
}
