//! Wire behavior of the translation client against a mock backend.

use mockito::{Matcher, Server};
use voxlate::{Error, TranslateClient};

fn client(base_url: &str) -> TranslateClient {
    TranslateClient::builder().base_url(base_url).build().unwrap()
}

#[tokio::test]
async fn translate_returns_translated_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/translate")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "text": "Hello",
            "target": "fr",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"translatedText":"Bonjour","detectedSourceLanguage":"en"}"#)
        .create_async()
        .await;

    let translated = client(&server.url()).translate("Hello", "fr").await.unwrap();
    assert_eq!(translated, "Bonjour");
    mock.assert_async().await;
}

#[tokio::test]
async fn failing_response_carries_the_backend_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/translate")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"bad language"}"#)
        .create_async()
        .await;

    let err = client(&server.url()).translate("Hello", "xx").await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad language");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparsable_failure_body_becomes_unknown() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/translate")
        .with_status(502)
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let err = client(&server.url()).translate("Hello", "fr").await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Unknown");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on the discard port; the request never completes.
    let client = client("http://127.0.0.1:9");
    let err = client.translate("Hello", "fr").await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
}

#[tokio::test]
async fn detect_returns_primary_detection() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/detect-language")
        .match_body(Matcher::Json(serde_json::json!({"text": "Bonjour le monde"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"language":"fr","confidence":0.97,"all_detections":[{"language":"fr","confidence":0.97}]}"#,
        )
        .create_async()
        .await;

    let detection = client(&server.url()).detect("Bonjour le monde").await.unwrap();
    assert_eq!(detection.language, "fr");
    assert!((detection.confidence - 0.97).abs() < 1e-9);
    mock.assert_async().await;
}
