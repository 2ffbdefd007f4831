//! Token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::{SecretToken, TokenKind, TokenPair};
use crate::domain::errors::StorageError;

/// Port for token persistence operations.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token.
    async fn get_token(&self, kind: TokenKind) -> Result<Option<SecretToken>, StorageError>;

    /// Stores token securely.
    async fn store_token(&self, kind: TokenKind, token: &SecretToken)
    -> Result<(), StorageError>;

    /// Deletes stored token.
    async fn delete_token(&self, kind: TokenKind) -> Result<(), StorageError>;

    /// Checks if token exists.
    async fn has_token(&self, kind: TokenKind) -> Result<bool, StorageError> {
        Ok(self.get_token(kind).await?.is_some())
    }

    /// Stores both halves of an OAuth exchange.
    async fn store_pair(&self, pair: &TokenPair) -> Result<(), StorageError> {
        self.store_token(TokenKind::Access, &pair.access_token)
            .await?;
        if let Some(refresh) = &pair.refresh_token {
            self.store_token(TokenKind::Refresh, refresh).await?;
        }
        Ok(())
    }

    /// Forgets every stored token.
    async fn clear(&self) -> Result<(), StorageError> {
        self.delete_token(TokenKind::Access).await?;
        self.delete_token(TokenKind::Refresh).await
    }
}
