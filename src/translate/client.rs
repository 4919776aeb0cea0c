//! Translation client.

use super::types::{ApiErrorBody, Detection, TranslationReply, TranslationRequest};
use crate::config::{ServiceConfig, DEFAULT_TIMEOUT_SECS};
use crate::transport::{HttpTransport, TransportError};
use crate::{Error, Result};

/// Fallback message when a failing response carries no parsable `error` field.
pub(crate) const UNKNOWN_ERROR: &str = "Unknown";

/// Client for the translation routes (`/translate`, `/detect-language`).
///
/// One request per call, no retries; every failure is terminal for that
/// invocation and mapped into [`Error::Api`] or [`Error::Transport`].
pub struct TranslateClient {
    transport: HttpTransport,
}

impl TranslateClient {
    pub fn builder() -> TranslateClientBuilder {
        TranslateClientBuilder::new()
    }

    /// Wrap an existing transport (shared with other clients).
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Translate `text` into the `target` language, returning the
    /// translated text verbatim.
    pub async fn translate(&self, text: &str, target: &str) -> Result<String> {
        let request = TranslationRequest {
            text: text.to_string(),
            target: target.to_string(),
        };
        let response = self.transport.post_json("/translate", &request).await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if status.is_success() {
            let reply: TranslationReply = serde_json::from_slice(&bytes)?;
            Ok(reply.translated_text)
        } else {
            Err(Error::api(status.as_u16(), extract_error_message(&bytes)))
        }
    }

    /// Ask the backend which language `text` is written in.
    pub async fn detect(&self, text: &str) -> Result<Detection> {
        let body = serde_json::json!({ "text": text });
        let response = self.transport.post_json("/detect-language", &body).await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if status.is_success() {
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(Error::api(status.as_u16(), extract_error_message(&bytes)))
        }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

/// Pull the `error` field out of a failure body, defaulting to `Unknown`.
pub(crate) fn extract_error_message(bytes: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorBody>(bytes)
        .map(|body| body.error)
        .unwrap_or_else(|_| UNKNOWN_ERROR.to_string())
}

pub struct TranslateClientBuilder {
    base_url: Option<String>,
    timeout_secs: u64,
}

impl TranslateClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<TranslateClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("Base URL must be specified"))?;
        let config = ServiceConfig::new(base_url).with_timeout_secs(self.timeout_secs);
        Ok(TranslateClient::new(HttpTransport::new(&config)?))
    }
}

impl Default for TranslateClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_extraction_falls_back_to_unknown() {
        assert_eq!(extract_error_message(br#"{"error":"bad language"}"#), "bad language");
        assert_eq!(extract_error_message(b"<html>oops</html>"), "Unknown");
        assert_eq!(extract_error_message(b""), "Unknown");
    }
}
