//! Application context constructed once at startup.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::dto::{PasteOutcome, UploadSettings};
use super::services::{StatusEvents, StatusNotifier};
use super::use_cases::{CreateClientUseCase, PasteImageUseCase};
use crate::domain::errors::{PasteError, StorageError};
use crate::domain::ports::{
    ClipboardPort, EditorPort, ImageHostPort, NotificationPort, OAuthPort, PromptPort,
    StatusDisplayPort, TokenStoragePort,
};

/// Adapters the application talks to.
#[derive(Clone)]
pub struct AppPorts {
    /// Clipboard image extractor.
    pub clipboard: Arc<dyn ClipboardPort>,
    /// Image host.
    pub image_host: Arc<dyn ImageHostPort>,
    /// OAuth endpoints.
    pub oauth: Arc<dyn OAuthPort>,
    /// Persisted access and refresh tokens.
    pub token_storage: Arc<dyn TokenStoragePort>,
    /// Browser and PIN prompt.
    pub prompt: Arc<dyn PromptPort>,
    /// User-facing messages.
    pub notifications: Arc<dyn NotificationPort>,
    /// Status line.
    pub status_display: Arc<dyn StatusDisplayPort>,
}

/// Owns the status bus, the notifier task, and the paste command.
///
/// Created by [`AppContext::activate`] and torn down by
/// [`AppContext::deactivate`].
pub struct AppContext {
    paste: PasteImageUseCase,
    token_storage: Arc<dyn TokenStoragePort>,
    notifier: JoinHandle<()>,
}

impl AppContext {
    /// Wires use cases to `ports` and starts the status notifier.
    ///
    /// Must be called inside a Tokio runtime.
    #[must_use]
    pub fn activate(ports: AppPorts, settings: UploadSettings) -> Self {
        let events = StatusEvents::default();
        let notifier = StatusNotifier::new(
            Arc::clone(&ports.status_display),
            Arc::clone(&ports.notifications),
        )
        .subscribe(&events);

        let create_client = CreateClientUseCase::new(
            ports.image_host,
            ports.oauth,
            Arc::clone(&ports.token_storage),
            ports.prompt,
            Arc::clone(&ports.notifications),
        );
        let paste = PasteImageUseCase::new(
            ports.clipboard,
            create_client,
            Arc::clone(&ports.token_storage),
            ports.notifications,
            events,
            settings,
        );

        debug!("Application context activated");

        Self {
            paste,
            token_storage: ports.token_storage,
            notifier,
        }
    }

    /// The "paste image" command.
    ///
    /// # Errors
    /// Returns error if no link was inserted.
    pub async fn paste_image(
        &self,
        editor: Option<&dyn EditorPort>,
    ) -> Result<PasteOutcome, PasteError> {
        self.paste.execute(editor).await
    }

    /// Forgets every stored token.
    ///
    /// # Errors
    /// Returns error if secure storage cannot be updated.
    pub async fn logout(&self) -> Result<(), StorageError> {
        self.token_storage.clear().await?;
        info!("Stored imgur tokens removed");
        Ok(())
    }

    /// Closes the status bus and waits for the notifier to finish.
    pub async fn deactivate(self) {
        let Self {
            paste, notifier, ..
        } = self;
        drop(paste);

        if let Err(e) = notifier.await {
            warn!(error = %e, "Status notifier task failed");
        }
        debug!("Application context deactivated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::UploadMode;
    use crate::domain::entities::{Credential, Position, TokenKind, UploadedImage};
    use crate::domain::ports::mocks::{
        MockClipboard, MockEditor, MockImageHostPort, MockNotificationPort, MockOAuth,
        MockPrompt, MockStatusDisplay, MockTokenStorage,
    };

    fn ports(
        host: MockImageHostPort,
        storage: Arc<MockTokenStorage>,
        display: Arc<MockStatusDisplay>,
    ) -> AppPorts {
        AppPorts {
            clipboard: Arc::new(MockClipboard::with_image(b"png")),
            image_host: Arc::new(host),
            oauth: Arc::new(MockOAuth::rejecting()),
            token_storage: storage,
            prompt: Arc::new(MockPrompt::cancelled()),
            notifications: Arc::new(MockNotificationPort::new()),
            status_display: display,
        }
    }

    fn anonymous() -> UploadSettings {
        UploadSettings::new(UploadMode::Anonymous, Credential::new(Some("id".into())))
    }

    #[tokio::test]
    async fn test_paste_then_deactivate_renders_final_status() {
        let mut host = MockImageHostPort::new();
        host.expect_upload()
            .returning(|_, _| Ok(UploadedImage::new("xyz", "https://i.imgur.com/xyz.png")));
        let display = Arc::new(MockStatusDisplay::new());
        let context = AppContext::activate(
            ports(host, Arc::new(MockTokenStorage::new()), display.clone()),
            anonymous(),
        );
        let editor = MockEditor::new("", Position::default());

        let outcome = context.paste_image(Some(&editor)).await.unwrap();
        context.deactivate().await;

        assert_eq!(outcome.image.link, "https://i.imgur.com/xyz.png");
        assert_eq!(
            display.history(),
            vec![
                "Uploading image...".to_string(),
                "Image upload completed: https://i.imgur.com/xyz.png".to_string()
            ]
        );
        assert!(display.is_finished());
    }

    #[tokio::test]
    async fn test_logout_clears_tokens() {
        let storage = Arc::new(MockTokenStorage::with_tokens(&[
            (TokenKind::Access, "access"),
            (TokenKind::Refresh, "refresh"),
        ]));
        let context = AppContext::activate(
            ports(
                MockImageHostPort::new(),
                storage.clone(),
                Arc::new(MockStatusDisplay::new()),
            ),
            anonymous(),
        );

        context.logout().await.unwrap();
        context.deactivate().await;

        assert_eq!(storage.value(TokenKind::Access).await, None);
        assert_eq!(storage.value(TokenKind::Refresh).await, None);
    }
}
