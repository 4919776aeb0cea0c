//! Service configuration and the fixed language table.

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

/// Language value meaning "let the backend pick"; normalized to
/// [`ServiceConfig::default_speech_lang`] before a speech request is sent.
pub const AUTO_LANG: &str = "auto";

/// Default backend address (the development server's bind).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_SPEECH_LANG: &str = "en";

/// Connection settings for the translation / speech backend.
///
/// Environment overrides, in the usual precedence (explicit value beats
/// environment beats default):
/// - `VOXLATE_BASE_URL` - backend base URL
/// - `VOXLATE_HTTP_TIMEOUT_SECS` - request timeout
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub default_speech_lang: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_speech_lang: DEFAULT_SPEECH_LANG.to_string(),
        }
    }

    /// Build a configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = env::var("VOXLATE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("VOXLATE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout_secs,
            default_speech_lang: DEFAULT_SPEECH_LANG.to_string(),
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// One entry of the fixed target-language list the UI offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Target languages offered by the selection widgets, in display order.
pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh-CN", name: "Chinese (Simplified)" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "ru", name: "Russian" },
];

static LANGUAGE_INDEX: Lazy<HashMap<&'static str, &'static Language>> =
    Lazy::new(|| LANGUAGES.iter().map(|l| (l.code, l)).collect());

/// Look up a language from the fixed list by its code.
pub fn language(code: &str) -> Option<&'static Language> {
    LANGUAGE_INDEX.get(code).copied()
}

/// Map the `auto` placeholder to the configured default speech language.
/// Any other value passes through untouched; the backend owns validation.
pub fn normalize_speech_lang(lang: &str, default: &str) -> String {
    if lang == AUTO_LANG || lang.is_empty() {
        default.to_string()
    } else {
        lang.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_maps_to_default() {
        assert_eq!(normalize_speech_lang("auto", "en"), "en");
        assert_eq!(normalize_speech_lang("", "en"), "en");
        assert_eq!(normalize_speech_lang("fr", "en"), "fr");
    }

    #[test]
    fn language_lookup() {
        assert_eq!(language("fr").map(|l| l.name), Some("French"));
        assert!(language("tlh").is_none());
    }
}
