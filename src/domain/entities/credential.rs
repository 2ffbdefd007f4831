//! Imgur credentials and secret token value objects.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret string (access token, refresh token, client secret) with masking.
///
/// The value is wiped from memory when dropped and never shows up in
/// `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretToken {
    value: String,
}

impl SecretToken {
    /// Creates a token from a non-blank value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return None;
        }

        Some(Self { value })
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        let count = self.value.chars().count();
        if count <= 10 {
            return "*".repeat(count);
        }

        let prefix: String = self.value.chars().take(4).collect();
        let suffix: String = self.value.chars().skip(count - 4).collect();
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// Which persisted token a storage operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Short-lived bearer token.
    Access,
    /// Long-lived token exchanged for new access tokens.
    Refresh,
}

impl TokenKind {
    /// Storage key of the token.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Access => "access_token",
            Self::Refresh => "refresh_token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Token pair returned by an OAuth exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// New access token.
    pub access_token: SecretToken,
    /// New refresh token, when the server rotated it.
    pub refresh_token: Option<SecretToken>,
}

impl TokenPair {
    /// Creates a token pair.
    #[must_use]
    pub const fn new(access_token: SecretToken, refresh_token: Option<SecretToken>) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Everything known about the caller's Imgur identity at paste time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Application client id.
    pub client_id: Option<String>,
    /// Application client secret, needed for OAuth exchanges.
    pub client_secret: Option<SecretToken>,
    /// User access token.
    pub access_token: Option<SecretToken>,
    /// User refresh token.
    pub refresh_token: Option<SecretToken>,
}

impl Credential {
    /// Creates a credential holding only a client id.
    #[must_use]
    pub fn new(client_id: Option<String>) -> Self {
        Self {
            client_id: client_id.filter(|id| !id.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Sets the client secret.
    #[must_use]
    pub fn with_client_secret(mut self, secret: Option<SecretToken>) -> Self {
        self.client_secret = secret;
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<SecretToken>) -> Self {
        self.access_token = token;
        self
    }

    /// Sets the refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, token: Option<SecretToken>) -> Self {
        self.refresh_token = token;
        self
    }

    /// Returns client id and secret when both are configured.
    #[must_use]
    pub fn client_pair(&self) -> Option<(&str, &SecretToken)> {
        self.client_id.as_deref().zip(self.client_secret.as_ref())
    }
}

/// Authorization attached to an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadAuth {
    /// Anonymous upload identified by the application.
    ClientId(String),
    /// Upload into the authorized user's account.
    Bearer(SecretToken),
}

impl UploadAuth {
    /// Value of the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::ClientId(id) => format!("Client-ID {id}"),
            Self::Bearer(token) => format!("Bearer {}", token.as_str()),
        }
    }

    /// Returns whether the upload is tied to a user account.
    #[must_use]
    pub const fn is_user(&self) -> bool {
        matches!(self, Self::Bearer(_))
    }
}
