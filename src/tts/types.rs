//! TTS wire and audio types.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Body of `POST /tts`. `voice` and `format` are optional refinements the
/// backend accepts; when unset they are left off the wire entirely.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
            voice: None,
            format: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.format = Some(format.wire_name().to_string());
        self
    }
}

/// Synthesized audio as returned by the backend: opaque bytes plus the
/// format they were requested in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOutput {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioOutput {
    /// Write the audio to disk (the "download" action).
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}

/// The two encodings the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    /// Name used on the wire; the backend calls uncompressed audio `linear16`.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "linear16",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "linear16" | "wav" => Self::Wav,
            _ => Self::Mp3,
        }
    }
}

/// One entry of the backend's `/voices` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Voice {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Wrapper object the `/voices` route answers with.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VoicesReply {
    #[serde(default)]
    pub voices: Vec<Voice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_options_stay_off_the_wire() {
        let body = serde_json::to_value(SpeechRequest::new("hi", "en")).unwrap();
        assert_eq!(body, serde_json::json!({"text": "hi", "lang": "en"}));
    }

    #[test]
    fn format_round_trip() {
        assert_eq!(AudioFormat::from_wire("linear16"), AudioFormat::Wav);
        assert_eq!(AudioFormat::from_wire("mp3"), AudioFormat::Mp3);
        assert_eq!(AudioFormat::from_wire("anything"), AudioFormat::Mp3);
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
    }
}
