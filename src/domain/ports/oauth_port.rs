//! OAuth port for PIN-based authorization.

use async_trait::async_trait;

use crate::domain::entities::{SecretToken, TokenPair};
use crate::domain::errors::ApiError;

/// Port for the image host's OAuth endpoints.
#[async_trait]
pub trait OAuthPort: Send + Sync {
    /// Page where the user signs in and obtains a PIN.
    fn authorization_url(&self, client_id: &str) -> String;

    /// Exchanges a one-time PIN for a token pair.
    async fn exchange_pin(
        &self,
        client_id: &str,
        client_secret: &SecretToken,
        pin: &str,
    ) -> Result<TokenPair, ApiError>;

    /// Exchanges a refresh token for a new access token.
    async fn refresh(
        &self,
        client_id: &str,
        client_secret: &SecretToken,
        refresh_token: &SecretToken,
    ) -> Result<TokenPair, ApiError>;
}
