//! Translation wire types.

use serde::{Deserialize, Serialize};

/// Body of `POST /translate`.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target: String,
}

/// Successful `/translate` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationReply {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    /// Source language as detected by the backend; `und` when it could not tell.
    #[serde(rename = "detectedSourceLanguage", default)]
    pub detected_source_language: Option<String>,
}

/// Failure body shared by the JSON routes: `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}

/// Successful `/detect-language` response (primary detection).
#[derive(Debug, Clone, Deserialize)]
pub struct Detection {
    pub language: String,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_decodes_wire_names() {
        let reply: TranslationReply =
            serde_json::from_str(r#"{"translatedText":"Bonjour","detectedSourceLanguage":"en"}"#)
                .unwrap();
        assert_eq!(reply.translated_text, "Bonjour");
        assert_eq!(reply.detected_source_language.as_deref(), Some("en"));
    }

    #[test]
    fn reply_tolerates_missing_detection() {
        let reply: TranslationReply =
            serde_json::from_str(r#"{"translatedText":"Hola"}"#).unwrap();
        assert!(reply.detected_source_language.is_none());
    }

    #[test]
    fn request_serializes_flat_fields() {
        let body = serde_json::to_value(TranslationRequest {
            text: "Hello".into(),
            target: "fr".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"text": "Hello", "target": "fr"}));
    }
}
