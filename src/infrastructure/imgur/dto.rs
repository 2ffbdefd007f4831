use serde::Deserialize;

/// Envelope around every Imgur API v3 response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Payload. `success` and `status` duplicate the HTTP response and are ignored.
    pub data: T,
}

/// Uploaded image payload.
#[derive(Debug, Deserialize)]
pub struct ImageData {
    /// Image id.
    pub id: String,
    /// Public URL.
    pub link: String,
    /// Anonymous deletion token.
    #[serde(default)]
    pub deletehash: Option<String>,
}

/// Error payload; `error` is a string or a nested object depending on the endpoint.
#[derive(Debug, Deserialize)]
pub struct ErrorData {
    /// Error description.
    pub error: serde_json::Value,
}

impl ErrorData {
    /// Flattens the error into one line.
    pub fn message(&self) -> String {
        match &self.error {
            serde_json::Value::String(message) => message.clone(),
            serde_json::Value::Object(fields) => fields
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| self.error.to_string(), str::to_string),
            other => other.to_string(),
        }
    }
}

/// OAuth token endpoint response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// New access token.
    pub access_token: String,
    /// New or rotated refresh token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Account the token belongs to.
    #[serde(default)]
    pub account_username: Option<String>,
}

/// OAuth endpoint error response.
#[derive(Debug, Deserialize)]
pub struct OAuthErrorResponse {
    /// Error description.
    #[serde(default)]
    pub error: Option<String>,
}
