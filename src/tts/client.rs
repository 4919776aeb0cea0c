//! TTS (Text-to-Speech) client.

use super::types::{AudioFormat, AudioOutput, SpeechRequest, Voice, VoicesReply};
use crate::config::{ServiceConfig, DEFAULT_TIMEOUT_SECS};
use crate::transport::{HttpTransport, TransportError};
use crate::{Error, Result};

/// Client for speech synthesis (`/tts`) and voice discovery (`/voices`).
pub struct TtsClient {
    transport: HttpTransport,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// Wrap an existing transport (shared with other clients).
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Synthesize speech for the request. The success body is opaque audio;
    /// a failure body is unspecified, so whatever text it holds becomes the
    /// error message.
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<AudioOutput> {
        let response = self.transport.post_json("/tts", request).await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            let body_str = String::from_utf8_lossy(&bytes);
            return Err(Error::api(status.as_u16(), body_str.trim().to_string()));
        }

        let format = request
            .format
            .as_deref()
            .map(AudioFormat::from_wire)
            .unwrap_or_default();
        Ok(AudioOutput {
            data: bytes.to_vec(),
            format,
        })
    }

    /// List the voices the backend offers, optionally filtered by language.
    pub async fn voices(&self, lang: Option<&str>) -> Result<Vec<Voice>> {
        let query: Vec<(&str, &str)> = lang.map(|l| ("lang", l)).into_iter().collect();
        let response = self.transport.get("/voices", &query).await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            let body_str = String::from_utf8_lossy(&bytes);
            return Err(Error::api(status.as_u16(), body_str.trim().to_string()));
        }

        let reply: VoicesReply = serde_json::from_slice(&bytes)?;
        Ok(reply.voices)
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

pub struct TtsClientBuilder {
    base_url: Option<String>,
    timeout_secs: u64,
}

impl TtsClientBuilder {
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

    pub fn build(self) -> Result<TtsClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("Base URL must be specified"))?;
        let config = ServiceConfig::new(base_url).with_timeout_secs(self.timeout_secs);
        Ok(TtsClient::new(HttpTransport::new(&config)?))
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
