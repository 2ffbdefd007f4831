//! Imgur API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};
use tracing::{debug, info, warn};

use super::dto::{Envelope, ErrorData, ImageData, OAuthErrorResponse, TokenResponse};
use crate::domain::entities::{SecretToken, TokenPair, UploadAuth, UploadedImage};
use crate::domain::errors::ApiError;
use crate::domain::ports::{ImageHostPort, OAuthPort};

const IMGUR_API_BASE: &str = "https://api.imgur.com";
const USER_AGENT: &str = concat!("imgpaste/", env!("CARGO_PKG_VERSION"));

/// Imgur upload and OAuth client.
pub struct ImgurClient {
    client: Client,
    base_url: String,
}

impl ImgurClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(IMGUR_API_BASE)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn transport_error(e: &reqwest::Error) -> ApiError {
        warn!(error = %e, "Failed to reach imgur");
        if e.is_timeout() {
            ApiError::network("request timed out")
        } else if e.is_connect() {
            ApiError::network("failed to connect to imgur")
        } else {
            ApiError::network(e.to_string())
        }
    }

    async fn api_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = match response.json::<Envelope<ErrorData>>().await {
            Ok(body) => body.data.message(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        ApiError::status(status.as_u16(), message)
    }

    async fn oauth_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = response
            .json::<OAuthErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("HTTP {status}"));

        ApiError::status(status.as_u16(), message)
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenPair, ApiError> {
        let url = format!("{}/oauth2/token", self.base_url);

        let response = self
            .client
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::oauth_error(status, response).await);
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse token response");
            ApiError::invalid_response(format!("failed to parse token response: {e}"))
        })?;

        if let Some(account) = &body.account_username {
            info!(account = %account, "Token issued");
        }

        let access_token = SecretToken::new(body.access_token)
            .ok_or_else(|| ApiError::invalid_response("empty access token"))?;
        let refresh_token = body.refresh_token.and_then(SecretToken::new);

        Ok(TokenPair::new(access_token, refresh_token))
    }
}

#[async_trait]
impl ImageHostPort for ImgurClient {
    async fn upload(
        &self,
        auth: &UploadAuth,
        image_base64: &str,
    ) -> Result<UploadedImage, ApiError> {
        let url = format!("{}/3/image", self.base_url);

        debug!(user = auth.is_user(), "Uploading image to imgur");

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, auth.header_value())
            .form(&[("image", image_base64), ("type", "base64")])
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }

        let body: Envelope<ImageData> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse upload response");
            ApiError::invalid_response(format!("failed to parse response: {e}"))
        })?;

        debug!(id = %body.data.id, link = %body.data.link, "Image uploaded");

        Ok(UploadedImage::new(body.data.id, body.data.link).with_deletehash(body.data.deletehash))
    }
}

#[async_trait]
impl OAuthPort for ImgurClient {
    fn authorization_url(&self, client_id: &str) -> String {
        let base = format!("{}/oauth2/authorize", self.base_url);
        Url::parse_with_params(&base, &[("client_id", client_id), ("response_type", "pin")])
            .map_or(base, |url| url.to_string())
    }

    async fn exchange_pin(
        &self,
        client_id: &str,
        client_secret: &SecretToken,
        pin: &str,
    ) -> Result<TokenPair, ApiError> {
        debug!("Exchanging PIN for tokens");
        self.request_token(&[
            ("client_id", client_id),
            ("client_secret", client_secret.as_str()),
            ("grant_type", "pin"),
            ("pin", pin),
        ])
        .await
    }

    async fn refresh(
        &self,
        client_id: &str,
        client_secret: &SecretToken,
        refresh_token: &SecretToken,
    ) -> Result<TokenPair, ApiError> {
        debug!(refresh_token = %refresh_token, "Refreshing access token");
        self.request_token(&[
            ("client_id", client_id),
            ("client_secret", client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ])
        .await
    }
}
