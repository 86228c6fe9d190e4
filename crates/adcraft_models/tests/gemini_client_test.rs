//! Tests for GeminiClient against a scripted provider client.

use adcraft_error::{AdcraftErrorKind, GenerationErrorKind, ProviderError, ProviderErrorKind};
use adcraft_interface::{ProviderClient, TextGenerator};
use adcraft_models::GeminiClient;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Provider client that answers with a fixed reply and records requests.
struct ScriptedClient {
    reply: Result<Value, ProviderError>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedClient {
    fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing(kind: ProviderErrorKind) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(ProviderError::new(kind)),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderClient for ScriptedClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.reply.clone()
    }
}

fn candidate(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn test_generate_text_returns_candidate_text() -> anyhow::Result<()> {
    let transport = ScriptedClient::replying(candidate("Hello from Gemini"));
    let client = GeminiClient::new(transport.clone(), Some("key-123".to_string()), "gemini-2.0-flash")
        .with_base_url("https://llm.test/v1beta/");

    let text = client.generate_text("Say hello").await?;
    assert_eq!(text, "Hello from Gemini");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        "https://llm.test/v1beta/models/gemini-2.0-flash:generateContent?key=key-123"
    );
    assert_eq!(calls[0].1["contents"][0]["parts"][0]["text"], "Say hello");
    Ok(())
}

#[tokio::test]
async fn test_missing_key_never_dispatches() {
    let transport = ScriptedClient::replying(candidate("unused"));
    let client = GeminiClient::new(transport.clone(), None, "gemini-2.0-flash");

    assert!(!client.is_configured());
    let err = client.generate_text("anything").await.unwrap_err();
    match err.kind() {
        AdcraftErrorKind::Generation(e) => {
            assert_eq!(e.kind, GenerationErrorKind::UninitializedProvider)
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_blank_key_is_not_configured() {
    let transport = ScriptedClient::replying(candidate("unused"));
    let client = GeminiClient::new(transport, Some("  ".to_string()), "gemini-2.0-flash");
    assert!(!client.is_configured());
}

#[tokio::test]
async fn test_error_payload_is_upstream() {
    let transport = ScriptedClient::replying(json!({
        "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
    }));
    let client = GeminiClient::new(transport, Some("bad".to_string()), "gemini-2.0-flash");

    let err = client.generate_text("hi").await.unwrap_err();
    match err.kind() {
        AdcraftErrorKind::Generation(e) => match &e.kind {
            GenerationErrorKind::Upstream(message) => {
                assert!(message.contains("API key not valid"));
                assert!(message.contains("403"));
            }
            other => panic!("unexpected kind: {}", other),
        },
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_empty_candidates_is_malformed() {
    let transport = ScriptedClient::replying(json!({ "candidates": [] }));
    let client = GeminiClient::new(transport, Some("key".to_string()), "gemini-2.0-flash");

    let err = client.generate_text("hi").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        AdcraftErrorKind::Generation(e) if matches!(e.kind, GenerationErrorKind::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    let transport = ScriptedClient::failing(ProviderErrorKind::Timeout);
    let client = GeminiClient::new(transport, Some("key".to_string()), "gemini-2.0-flash");

    let err = client.generate_text("hi").await.unwrap_err();
    assert_eq!(err.category(), adcraft_error::ErrorCategory::Transport);
}
