//! Keyring-based token storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::{SecretToken, TokenKind};
use crate::domain::errors::StorageError;
use crate::domain::ports::TokenStoragePort;

const KEYRING_SERVICE: &str = "imgpaste";

/// System keyring token storage adapter.
///
/// Each token kind lives in its own entry under one service name.
pub struct KeyringTokenStorage {
    service: String,
}

impl KeyringTokenStorage {
    /// Creates new storage with the default service name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(KEYRING_SERVICE)
    }

    /// Creates storage with a custom service name.
    #[must_use]
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, kind: TokenKind) -> Result<Entry, StorageError> {
        Entry::new(&self.service, kind.key())
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl Default for KeyringTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStoragePort for KeyringTokenStorage {
    async fn get_token(&self, kind: TokenKind) -> Result<Option<SecretToken>, StorageError> {
        debug!(service = %self.service, %kind, "Retrieving token from keyring");

        let entry = self.entry(kind)?;

        match entry.get_password() {
            Ok(password) => {
                debug!(%kind, "Token found in keyring");
                Ok(SecretToken::new(password))
            }
            Err(keyring::Error::NoEntry) => {
                debug!(%kind, "No token stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, %kind, "Failed to retrieve token from keyring");
                Err(StorageError::read(kind, e.to_string()))
            }
        }
    }

    async fn store_token(
        &self,
        kind: TokenKind,
        token: &SecretToken,
    ) -> Result<(), StorageError> {
        debug!(service = %self.service, %kind, "Storing token in keyring");

        let entry = self.entry(kind)?;

        entry.set_password(token.as_str()).map_err(|e| {
            warn!(error = %e, %kind, "Failed to store token in keyring");
            StorageError::write(kind, e.to_string())
        })?;

        debug!(%kind, "Token stored successfully");
        Ok(())
    }

    async fn delete_token(&self, kind: TokenKind) -> Result<(), StorageError> {
        debug!(service = %self.service, %kind, "Deleting token from keyring");

        let entry = self.entry(kind)?;

        match entry.delete_credential() {
            Ok(()) => {
                debug!(%kind, "Token deleted from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!(%kind, "No token to delete");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, %kind, "Failed to delete token from keyring");
                Err(StorageError::remove(kind, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_store_and_retrieve_token_pair() {
        let storage = KeyringTokenStorage::with_service("imgpaste-test");
        let access = SecretToken::new("test-access-token").unwrap();

        storage.store_token(TokenKind::Access, &access).await.unwrap();

        let retrieved = storage.get_token(TokenKind::Access).await.unwrap();
        assert_eq!(retrieved.unwrap().as_str(), "test-access-token");
        assert!(!storage.has_token(TokenKind::Refresh).await.unwrap());

        storage.clear().await.unwrap();
        assert!(storage.get_token(TokenKind::Access).await.unwrap().is_none());
    }
}
