//! Paste image use case.

use std::path::Path;
use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, error, info, warn};

use super::CreateClientUseCase;
use crate::application::dto::{PasteOutcome, UploadMode, UploadSettings};
use crate::application::services::StatusEvents;
use crate::domain::entities::{
    ClipboardOutcome, ImageFile, PLACEHOLDER, PlaceholderSpan, TokenKind, UploadStatus,
    UploadedImage,
};
use crate::domain::errors::PasteError;
use crate::domain::ports::{ClipboardPort, EditorPort, NotificationPort, TokenStoragePort};

const NO_EDITOR: &str = "No active editor to paste into.";
const SAVE_FIRST: &str = "You need to save file first to paste a image";
const NOT_AN_IMAGE: &str = "Copied object is not a image.";
const INSTALL_XCLIP: &str = "You need to install xclip command first.";

/// Pastes the clipboard image into the active document as an Imgur link.
pub struct PasteImageUseCase {
    clipboard: Arc<dyn ClipboardPort>,
    create_client: CreateClientUseCase,
    storage: Arc<dyn TokenStoragePort>,
    notifications: Arc<dyn NotificationPort>,
    events: StatusEvents,
    settings: UploadSettings,
}

impl PasteImageUseCase {
    /// Creates new paste use case.
    #[must_use]
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        create_client: CreateClientUseCase,
        storage: Arc<dyn TokenStoragePort>,
        notifications: Arc<dyn NotificationPort>,
        events: StatusEvents,
        settings: UploadSettings,
    ) -> Self {
        Self {
            clipboard,
            create_client,
            storage,
            notifications,
            events,
            settings,
        }
    }

    /// Runs one paste against `editor`.
    ///
    /// The placeholder goes in before the upload starts and is replaced
    /// or removed once it finishes, whatever the outcome.
    ///
    /// # Errors
    /// Returns error describing why no link was inserted. The user has
    /// already been informed.
    pub async fn execute(
        &self,
        editor: Option<&dyn EditorPort>,
    ) -> Result<PasteOutcome, PasteError> {
        let Some(editor) = editor else {
            self.notifications.info(NO_EDITOR);
            return Err(PasteError::NoActiveEditor);
        };

        if editor.is_untitled() {
            self.notifications.info(SAVE_FIRST);
            return Err(PasteError::UntitledDocument);
        }

        let image_file = ImageFile::create().map_err(|e| {
            error!(error = %e, "Failed to create temporary image directory");
            self.notifications
                .error(&format!("Failed to prepare image file: {e}"));
            PasteError::TempFile(e)
        })?;

        let image_path = match self.extract(image_file.path()).await? {
            ClipboardOutcome::Saved(path) => path,
            ClipboardOutcome::NoImage => {
                self.notifications.info(NOT_AN_IMAGE);
                return Err(PasteError::NoImage);
            }
            ClipboardOutcome::MissingDependency(name) => {
                self.notifications.info(&missing_dependency_message(&name));
                return Err(PasteError::MissingDependency(name));
            }
        };

        let span = PlaceholderSpan::placeholder_at(editor.selection_start());
        editor.insert(span.start, PLACEHOLDER).await.map_err(|e| {
            error!(error = %e, "Failed to insert placeholder");
            self.notifications
                .error(&format!("Failed to insert placeholder: {e}"));
            PasteError::Editor(e)
        })?;
        debug!(%span, "Placeholder inserted");

        self.events.fire(UploadStatus::Uploading);

        match self.upload(&image_path).await {
            Ok(image) => self.resolve_success(editor, span, image).await,
            Err(e) => Err(self.resolve_failure(editor, span, e).await),
        }
    }

    async fn extract(&self, destination: &Path) -> Result<ClipboardOutcome, PasteError> {
        debug!(path = %destination.display(), "Saving clipboard image");

        self.clipboard.save_image(destination).await.map_err(|e| {
            warn!(error = %e, "Clipboard extraction failed");
            self.notifications
                .error(&format!("Failed to read the clipboard: {e}"));
            PasteError::Clipboard(e)
        })
    }

    async fn upload(&self, image_path: &Path) -> Result<UploadedImage, PasteError> {
        let client = self.create_client.execute(&self.settings).await?;

        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(PasteError::ImageRead)?;
        let encoded = general_purpose::STANDARD.encode(&bytes);

        debug!(bytes = bytes.len(), user = client.auth().is_user(), "Uploading image");

        match client.upload(&encoded).await {
            Ok(image) => Ok(image),
            Err(e) => {
                if e.is_authorization() && self.settings.mode == UploadMode::User {
                    info!("Access token rejected, forgetting it");
                    if let Err(e) = self.storage.delete_token(TokenKind::Access).await {
                        error!(error = %e, "Failed to delete rejected access token");
                    }
                }
                Err(PasteError::Upload(e))
            }
        }
    }

    async fn resolve_success(
        &self,
        editor: &dyn EditorPort,
        span: PlaceholderSpan,
        image: UploadedImage,
    ) -> Result<PasteOutcome, PasteError> {
        let inserted = self.settings.link_format.render(&image.link);

        if let Err(e) = editor.replace(span, &inserted).await {
            error!(error = %e, "Failed to replace placeholder");
            if let Err(e) = editor.delete(span).await {
                error!(error = %e, "Failed to remove placeholder");
            }
            self.events
                .fire(UploadStatus::failed(format!("failed to insert link: {e}")));
            return Err(PasteError::Editor(e));
        }

        info!(link = %image.link, "Image pasted");
        self.events.fire(UploadStatus::succeeded(image.link.clone()));

        Ok(PasteOutcome {
            image,
            inserted,
            position: span.start,
        })
    }

    async fn resolve_failure(
        &self,
        editor: &dyn EditorPort,
        span: PlaceholderSpan,
        error: PasteError,
    ) -> PasteError {
        warn!(error = %error, "Paste failed, removing placeholder");

        if let Err(e) = editor.delete(span).await {
            error!(error = %e, "Failed to remove placeholder");
        }

        self.events.fire(UploadStatus::failed(error.to_string()));
        error
    }
}

fn missing_dependency_message(name: &str) -> String {
    if name == "xclip" {
        INSTALL_XCLIP.to_string()
    } else {
        format!("You need to install {name} command first.")
    }
}
