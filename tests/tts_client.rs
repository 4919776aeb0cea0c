//! Wire behavior of the TTS client against a mock backend.

use mockito::{Matcher, Server};
use voxlate::{AudioFormat, Error, SpeechRequest, TtsClient};

const AUDIO_BYTES: &[u8] = b"ID3\x03fake-mp3-payload";

fn client(base_url: &str) -> TtsClient {
    TtsClient::builder().base_url(base_url).build().unwrap()
}

#[tokio::test]
async fn synthesize_returns_opaque_audio() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/tts")
        .match_body(Matcher::Json(serde_json::json!({
            "text": "Hello there",
            "lang": "en",
        })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(AUDIO_BYTES.to_vec())
        .create_async()
        .await;

    let audio = client(&server.url())
        .synthesize(&SpeechRequest::new("Hello there", "en"))
        .await
        .unwrap();
    assert_eq!(audio.data, AUDIO_BYTES);
    assert_eq!(audio.format, AudioFormat::Mp3);
    mock.assert_async().await;
}

#[tokio::test]
async fn optional_fields_reach_the_wire_when_set() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/tts")
        .match_body(Matcher::Json(serde_json::json!({
            "text": "Hello",
            "lang": "en",
            "voice": "en-US-JennyNeural",
            "format": "linear16",
        })))
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_body(b"RIFFfake-wav".to_vec())
        .create_async()
        .await;

    let request = SpeechRequest::new("Hello", "en")
        .with_voice("en-US-JennyNeural")
        .with_format(AudioFormat::Wav);
    let audio = client(&server.url()).synthesize(&request).await.unwrap();
    assert_eq!(audio.format, AudioFormat::Wav);
    mock.assert_async().await;
}

#[tokio::test]
async fn failing_synthesis_reports_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/tts")
        .with_status(500)
        .with_body("synthesis backend unavailable")
        .create_async()
        .await;

    let err = client(&server.url())
        .synthesize(&SpeechRequest::new("Hello", "en"))
        .await
        .unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "synthesis backend unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn voices_listing_decodes_the_wrapper() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/voices")
        .match_query(Matcher::UrlEncoded("lang".into(), "en".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"voices":[{"name":"en-US-JennyNeural","language":"en","gender":"Female"}]}"#,
        )
        .create_async()
        .await;

    let voices = client(&server.url()).voices(Some("en")).await.unwrap();
    assert_eq!(voices.len(), 1);
    assert_eq!(voices[0].name, "en-US-JennyNeural");
    assert_eq!(voices[0].language.as_deref(), Some("en"));
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_voices_listing_is_fine() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/voices")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"voices":[]}"#)
        .create_async()
        .await;

    let voices = client(&server.url()).voices(None).await.unwrap();
    assert!(voices.is_empty());
}
