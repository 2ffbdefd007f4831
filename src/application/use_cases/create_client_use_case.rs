//! Upload client creation use case.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::dto::{UploadClient, UploadMode, UploadSettings};
use crate::domain::entities::{Credential, SecretToken, TokenKind, UploadAuth};
use crate::domain::errors::ClientError;
use crate::domain::ports::{
    ImageHostPort, NotificationPort, OAuthPort, PromptPort, TokenStoragePort,
};

const CLIENT_ID_REQUIRED: &str = "client_id is required to upload a image to imgur.";
const REFRESH_FAILED: &str = "Failed to generate a access_token by refresh_token.";
const AUTHORIZATION_FAILED: &str = "Failed to authorize. Please try again.";

/// Builds an authenticated upload client from settings and stored tokens.
#[derive(Clone)]
pub struct CreateClientUseCase {
    image_host: Arc<dyn ImageHostPort>,
    oauth: Arc<dyn OAuthPort>,
    storage: Arc<dyn TokenStoragePort>,
    prompt: Arc<dyn PromptPort>,
    notifications: Arc<dyn NotificationPort>,
}

impl CreateClientUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        image_host: Arc<dyn ImageHostPort>,
        oauth: Arc<dyn OAuthPort>,
        storage: Arc<dyn TokenStoragePort>,
        prompt: Arc<dyn PromptPort>,
        notifications: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            image_host,
            oauth,
            storage,
            prompt,
            notifications,
        }
    }

    /// Produces an upload client for the configured mode.
    ///
    /// Anonymous mode needs a client id. User mode uses, in order, a
    /// stored access token, a stored refresh token, and finally an
    /// interactive PIN authorization.
    ///
    /// # Errors
    /// Returns error if required settings are missing or an OAuth
    /// exchange fails. The user has already been told why.
    pub async fn execute(&self, settings: &UploadSettings) -> Result<UploadClient, ClientError> {
        debug!(mode = %settings.mode, "Creating upload client");

        match settings.mode {
            UploadMode::Anonymous => self.anonymous(&settings.credential),
            UploadMode::User => self.user(&settings.credential).await,
        }
    }

    fn anonymous(&self, credential: &Credential) -> Result<UploadClient, ClientError> {
        let Some(client_id) = &credential.client_id else {
            self.notifications.info(CLIENT_ID_REQUIRED);
            return Err(ClientError::MissingClientId);
        };

        Ok(self.client(UploadAuth::ClientId(client_id.clone())))
    }

    async fn user(&self, configured: &Credential) -> Result<UploadClient, ClientError> {
        let credential = self.load_stored(configured).await;

        if let Some(access_token) = credential.access_token.clone() {
            debug!(token = %access_token, "Using access token");
            return Ok(self.client(UploadAuth::Bearer(access_token)));
        }

        match credential.refresh_token.clone() {
            Some(refresh_token) => self.refresh(&credential, &refresh_token).await,
            None => self.authorize(&credential).await,
        }
    }

    /// Only tokens in secure storage count, so deleting a rejected one
    /// always leads back to refresh or PIN authorization.
    async fn load_stored(&self, configured: &Credential) -> Credential {
        let stored_access = self.stored(TokenKind::Access).await;
        let stored_refresh = self.stored(TokenKind::Refresh).await;

        configured
            .clone()
            .with_access_token(stored_access)
            .with_refresh_token(stored_refresh)
    }

    async fn stored(&self, kind: TokenKind) -> Option<SecretToken> {
        match self.storage.get_token(kind).await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, %kind, "Failed to read stored token");
                None
            }
        }
    }

    async fn refresh(
        &self,
        credential: &Credential,
        refresh_token: &SecretToken,
    ) -> Result<UploadClient, ClientError> {
        let Some((client_id, client_secret)) = credential.client_pair() else {
            self.notifications.info(CLIENT_ID_REQUIRED);
            return Err(ClientError::MissingClientCredentials);
        };

        debug!("Exchanging refresh token for a new access token");

        match self
            .oauth
            .refresh(client_id, client_secret, refresh_token)
            .await
        {
            Ok(pair) => {
                info!("Access token regenerated from refresh token");
                if let Err(e) = self.storage.store_pair(&pair).await {
                    error!(error = %e, "Failed to persist refreshed access token");
                }
                Ok(self.client(UploadAuth::Bearer(pair.access_token.clone())))
            }
            Err(e) => {
                warn!(error = %e, "Refresh token exchange failed");
                if let Err(e) = self.storage.delete_token(TokenKind::Refresh).await {
                    error!(error = %e, "Failed to delete rejected refresh token");
                }
                self.notifications.error(REFRESH_FAILED);
                Err(ClientError::RefreshFailed(e))
            }
        }
    }

    async fn authorize(&self, credential: &Credential) -> Result<UploadClient, ClientError> {
        let Some((client_id, client_secret)) = credential.client_pair() else {
            self.notifications.info(CLIENT_ID_REQUIRED);
            return Err(ClientError::MissingClientCredentials);
        };

        let url = self.oauth.authorization_url(client_id);
        info!("Starting PIN authorization");
        if let Err(e) = self.prompt.open_url(&url).await {
            warn!(error = %e, "Failed to open browser");
            self.notifications
                .info(&format!("Open this page to authorize imgpaste: {url}"));
        }

        let pin = self
            .prompt
            .prompt_pin()
            .await
            .map(|pin| pin.trim().to_string())
            .filter(|pin| !pin.is_empty());
        let Some(pin) = pin else {
            warn!("PIN entry cancelled");
            self.notifications.error(AUTHORIZATION_FAILED);
            return Err(ClientError::authorization("no PIN entered"));
        };

        let pair = match self.oauth.exchange_pin(client_id, client_secret, &pin).await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "PIN exchange failed");
                self.notifications.error(AUTHORIZATION_FAILED);
                return Err(ClientError::authorization(e.to_string()));
            }
        };

        info!("Authorized with imgur");
        if let Err(e) = self.storage.store_pair(&pair).await {
            error!(error = %e, "Failed to persist tokens to secure storage");
        }

        Ok(self.client(UploadAuth::Bearer(pair.access_token.clone())))
    }

    fn client(&self, auth: UploadAuth) -> UploadClient {
        UploadClient::new(auth, Arc::clone(&self.image_host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TokenPair;
    use crate::domain::ports::mocks::{
        MockImageHostPort, MockNotificationPort, MockOAuth, MockPrompt, MockTokenStorage,
    };

    struct Fixture {
        storage: Arc<MockTokenStorage>,
        oauth: Arc<MockOAuth>,
        prompt: Arc<MockPrompt>,
        notifications: Arc<MockNotificationPort>,
    }

    impl Fixture {
        fn new(storage: MockTokenStorage, oauth: MockOAuth, prompt: MockPrompt) -> Self {
            Self {
                storage: Arc::new(storage),
                oauth: Arc::new(oauth),
                prompt: Arc::new(prompt),
                notifications: Arc::new(MockNotificationPort::new()),
            }
        }

        fn use_case(&self) -> CreateClientUseCase {
            CreateClientUseCase::new(
                Arc::new(MockImageHostPort::new()),
                self.oauth.clone(),
                self.storage.clone(),
                self.prompt.clone(),
                self.notifications.clone(),
            )
        }
    }

    fn token(value: &str) -> SecretToken {
        SecretToken::new(value).unwrap()
    }

    fn pair(access: &str, refresh: &str) -> TokenPair {
        TokenPair::new(token(access), Some(token(refresh)))
    }

    fn user_settings(client_id: Option<&str>, secret: Option<&str>) -> UploadSettings {
        let credential = Credential::new(client_id.map(str::to_string))
            .with_client_secret(secret.and_then(SecretToken::new));
        UploadSettings::new(UploadMode::User, credential)
    }

    #[tokio::test]
    async fn test_anonymous_uses_client_id() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting(),
            MockPrompt::cancelled(),
        );
        let settings = UploadSettings::new(
            UploadMode::Anonymous,
            Credential::new(Some("app-id".to_string())),
        );

        let client = fixture.use_case().execute(&settings).await.unwrap();

        assert_eq!(client.auth(), &UploadAuth::ClientId("app-id".to_string()));
    }

    #[tokio::test]
    async fn test_anonymous_without_client_id_informs_user() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting(),
            MockPrompt::cancelled(),
        );
        let settings = UploadSettings::new(UploadMode::Anonymous, Credential::default());

        let result = fixture.use_case().execute(&settings).await;

        assert!(matches!(result, Err(ClientError::MissingClientId)));
        assert_eq!(fixture.notifications.infos(), vec![CLIENT_ID_REQUIRED.to_string()]);
    }

    #[tokio::test]
    async fn test_stored_access_token_used() {
        let fixture = Fixture::new(
            MockTokenStorage::with_token(TokenKind::Access, "stored-access"),
            MockOAuth::rejecting(),
            MockPrompt::cancelled(),
        );

        let client = fixture
            .use_case()
            .execute(&user_settings(Some("id"), Some("secret")))
            .await
            .unwrap();

        assert_eq!(client.auth(), &UploadAuth::Bearer(token("stored-access")));
        assert!(fixture.oauth.calls().is_empty());
    }

    #[tokio::test]
    async fn test_settings_access_token_does_not_bypass_refresh() {
        let fixture = Fixture::new(
            MockTokenStorage::with_token(TokenKind::Refresh, "old-refresh"),
            MockOAuth::rejecting().with_refresh_result(pair("new-access", "new-refresh")),
            MockPrompt::cancelled(),
        );
        let mut settings = user_settings(Some("id"), Some("secret"));
        settings.credential.access_token = SecretToken::new("rejected-access");

        let client = fixture.use_case().execute(&settings).await.unwrap();

        assert_eq!(client.auth(), &UploadAuth::Bearer(token("new-access")));
        assert_eq!(fixture.oauth.calls(), vec!["refresh:old-refresh".to_string()]);
    }

    #[tokio::test]
    async fn test_settings_access_token_does_not_bypass_authorization() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting(),
            MockPrompt::cancelled(),
        );
        let mut settings = user_settings(Some("id"), Some("secret"));
        settings.credential.access_token = SecretToken::new("rejected-access");

        let result = fixture.use_case().execute(&settings).await;

        assert!(matches!(result, Err(ClientError::AuthorizationFailed { .. })));
        assert_eq!(fixture.prompt.opened().len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_token_exchanged_and_persisted() {
        let fixture = Fixture::new(
            MockTokenStorage::with_token(TokenKind::Refresh, "old-refresh"),
            MockOAuth::rejecting().with_refresh_result(pair("new-access", "new-refresh")),
            MockPrompt::cancelled(),
        );

        let client = fixture
            .use_case()
            .execute(&user_settings(Some("id"), Some("secret")))
            .await
            .unwrap();

        assert_eq!(client.auth(), &UploadAuth::Bearer(token("new-access")));
        assert_eq!(fixture.oauth.calls(), vec!["refresh:old-refresh".to_string()]);
        assert_eq!(
            fixture.storage.value(TokenKind::Access).await.as_deref(),
            Some("new-access")
        );
        assert_eq!(
            fixture.storage.value(TokenKind::Refresh).await.as_deref(),
            Some("new-refresh")
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_deletes_refresh_token() {
        let fixture = Fixture::new(
            MockTokenStorage::with_token(TokenKind::Refresh, "expired-refresh"),
            MockOAuth::rejecting(),
            MockPrompt::with_pin("1234"),
        );

        let result = fixture
            .use_case()
            .execute(&user_settings(Some("id"), Some("secret")))
            .await;

        assert!(matches!(result, Err(ClientError::RefreshFailed(_))));
        assert_eq!(fixture.storage.value(TokenKind::Refresh).await, None);
        assert_eq!(fixture.notifications.errors(), vec![REFRESH_FAILED.to_string()]);
        assert!(fixture.prompt.opened().is_empty());
    }

    #[tokio::test]
    async fn test_first_time_authorization_with_pin() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting().with_pin_result(pair("pin-access", "pin-refresh")),
            MockPrompt::with_pin(" 8675309 \n"),
        );

        let client = fixture
            .use_case()
            .execute(&user_settings(Some("id"), Some("secret")))
            .await
            .unwrap();

        assert_eq!(client.auth(), &UploadAuth::Bearer(token("pin-access")));
        assert_eq!(fixture.oauth.calls(), vec!["pin:8675309".to_string()]);
        assert_eq!(fixture.prompt.opened().len(), 1);
        assert!(fixture.prompt.opened()[0].contains("client_id=id"));
        assert_eq!(
            fixture.storage.value(TokenKind::Access).await.as_deref(),
            Some("pin-access")
        );
        assert_eq!(
            fixture.storage.value(TokenKind::Refresh).await.as_deref(),
            Some("pin-refresh")
        );
    }

    #[tokio::test]
    async fn test_first_time_authorization_needs_secret() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting(),
            MockPrompt::with_pin("1234"),
        );

        let result = fixture
            .use_case()
            .execute(&user_settings(Some("id"), None))
            .await;

        assert!(matches!(result, Err(ClientError::MissingClientCredentials)));
        assert_eq!(fixture.notifications.infos(), vec![CLIENT_ID_REQUIRED.to_string()]);
        assert!(fixture.prompt.opened().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_pin_fails_authorization() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting().with_pin_result(pair("a", "r")),
            MockPrompt::cancelled(),
        );

        let result = fixture
            .use_case()
            .execute(&user_settings(Some("id"), Some("secret")))
            .await;

        assert!(matches!(result, Err(ClientError::AuthorizationFailed { .. })));
        assert_eq!(fixture.notifications.errors(), vec![AUTHORIZATION_FAILED.to_string()]);
        assert!(fixture.oauth.calls().is_empty());
        assert_eq!(fixture.storage.value(TokenKind::Access).await, None);
    }

    #[tokio::test]
    async fn test_rejected_pin_stores_nothing() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting(),
            MockPrompt::with_pin("0000"),
        );

        let result = fixture
            .use_case()
            .execute(&user_settings(Some("id"), Some("secret")))
            .await;

        assert!(matches!(result, Err(ClientError::AuthorizationFailed { .. })));
        assert!(!fixture.storage.has_token(TokenKind::Access).await.unwrap());
        assert!(!fixture.storage.has_token(TokenKind::Refresh).await.unwrap());
    }

    #[tokio::test]
    async fn test_authorization_url_shown_when_browser_unavailable() {
        let fixture = Fixture::new(
            MockTokenStorage::new(),
            MockOAuth::rejecting().with_pin_result(pair("a", "r")),
            MockPrompt::with_pin("1234").without_browser(),
        );

        let client = fixture
            .use_case()
            .execute(&user_settings(Some("id"), Some("secret")))
            .await;

        assert!(client.is_ok());
        let infos = fixture.notifications.infos();
        assert_eq!(infos.len(), 1);
        assert!(infos[0].contains("oauth2/authorize"));
    }
}
