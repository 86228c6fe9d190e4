//! Tests for PublishOrchestrator against a scripted provider client.

use adcraft_core::{MediaKind, PlatformCredentials, PublishRequest, PublishStage};
use adcraft_error::{ProviderError, ProviderErrorKind};
use adcraft_interface::ProviderClient;
use adcraft_publish::{
    INVALID_ACCOUNT_ID, MISSING_CREDENTIALS, PlatformConfig, PlatformConfigBuilder,
    PublishOrchestrator,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock client replaying scripted responses and recording every call.
#[derive(Default)]
struct MockProviderClient {
    responses: Mutex<VecDeque<Result<Value, ProviderError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockProviderClient {
    fn scripted(responses: Vec<Result<Value, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderClient for MockProviderClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

fn orchestrator(client: Arc<MockProviderClient>) -> PublishOrchestrator {
    let config = PlatformConfigBuilder::default()
        .graph_base_url("https://graph.test/v18.0")
        .build()
        .unwrap();
    PublishOrchestrator::new(client, config)
}

fn request() -> PublishRequest {
    PublishRequest::new("https://cdn.test/mug.jpg", "Sip in style\n\n#mugs #ceramic")
}

fn credentials() -> PlatformCredentials {
    PlatformCredentials::new("tok-123", "1784")
}

#[tokio::test]
async fn test_two_phase_success() {
    let client = MockProviderClient::scripted(vec![
        Ok(json!({"id": "17800"})),
        Ok(json!({"id": "998877"})),
    ]);
    let orchestrator = orchestrator(client.clone());

    let result = orchestrator.publish(&request(), &credentials()).await;

    assert!(result.is_success());
    assert_eq!(result.post_id(), Some("998877"));

    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "https://graph.test/v18.0/1784/media");
    assert_eq!(calls[0].1["image_url"], "https://cdn.test/mug.jpg");
    assert_eq!(calls[0].1["caption"], "Sip in style\n\n#mugs #ceramic");
    assert_eq!(calls[0].1["access_token"], "tok-123");
    assert_eq!(calls[1].0, "https://graph.test/v18.0/1784/media_publish");
    assert_eq!(calls[1].1, json!({"creation_id": "17800", "access_token": "tok-123"}));
}

#[tokio::test]
async fn test_container_error_payload() {
    let client = MockProviderClient::scripted(vec![Ok(json!({
        "error": {"message": "Invalid OAuth token", "code": 190}
    }))]);
    let orchestrator = orchestrator(client.clone());

    let result = orchestrator.publish(&request(), &credentials()).await;

    assert_eq!(result.stage(), Some(PublishStage::ContainerCreation));
    assert_eq!(result.reason(), Some("Invalid OAuth token"));
    assert_eq!(result.provider_code(), Some("190"));
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn test_missing_credentials_make_no_call() {
    let client = MockProviderClient::scripted(vec![]);
    let orchestrator = orchestrator(client.clone());

    let cases = [
        PlatformCredentials::default(),
        PlatformCredentials {
            token: Some("tok".to_string()),
            account_id: None,
        },
        PlatformCredentials {
            token: Some("   ".to_string()),
            account_id: Some("1784".to_string()),
        },
    ];

    for creds in &cases {
        let result = orchestrator.publish(&request(), creds).await;
        assert_eq!(result.stage(), Some(PublishStage::ContainerCreation));
        assert!(result.reason().unwrap().contains("credentials"));
        assert_eq!(result.reason(), Some(MISSING_CREDENTIALS));
    }
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_non_numeric_account_id_makes_no_call() {
    let client = MockProviderClient::scripted(vec![]);
    let orchestrator = orchestrator(client.clone());

    for account_id in ["17/84", "1784?x=1", "1784#frag", "../me", "17 84", "abc"] {
        let result = orchestrator
            .publish(&request(), &PlatformCredentials::new("tok-123", account_id))
            .await;
        assert_eq!(
            result.stage(),
            Some(PublishStage::ContainerCreation),
            "account id {:?}",
            account_id
        );
        assert_eq!(result.reason(), Some(INVALID_ACCOUNT_ID));
    }
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_container_without_id() {
    let client = MockProviderClient::scripted(vec![Ok(json!({"status": "ok"}))]);
    let orchestrator = orchestrator(client.clone());

    let result = orchestrator.publish(&request(), &credentials()).await;

    assert_eq!(result.stage(), Some(PublishStage::ContainerCreation));
    assert_eq!(result.reason(), Some("no container id returned"));
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn test_commit_failures() {
    let scripts = vec![
        (
            json!({"error": {"message": "Media not ready", "code": "9007"}}),
            "Media not ready",
            Some("9007"),
        ),
        (json!({}), "no post id returned", None),
    ];

    for (commit, reason, code) in scripts {
        let client = MockProviderClient::scripted(vec![Ok(json!({"id": 17800})), Ok(commit)]);
        let orchestrator = orchestrator(client.clone());

        let result = orchestrator.publish(&request(), &credentials()).await;

        assert_eq!(result.stage(), Some(PublishStage::PublishCommit));
        assert_eq!(result.reason(), Some(reason));
        assert_eq!(result.provider_code(), code);
        assert_eq!(client.calls()[1].1["creation_id"], "17800");
    }
}

#[tokio::test]
async fn test_transport_failure_in_either_phase() {
    let container_timeout = MockProviderClient::scripted(vec![Err(ProviderError::new(
        ProviderErrorKind::Timeout,
    ))]);
    let result = orchestrator(container_timeout)
        .publish(&request(), &credentials())
        .await;
    assert_eq!(result.stage(), Some(PublishStage::Transport));

    let commit_refused = MockProviderClient::scripted(vec![
        Ok(json!({"id": "17800"})),
        Err(ProviderError::new(ProviderErrorKind::Connection(
            "connection reset".to_string(),
        ))),
    ]);
    let result = orchestrator(commit_refused)
        .publish(&request(), &credentials())
        .await;
    assert_eq!(result.stage(), Some(PublishStage::Transport));
    assert!(result.reason().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_undecodable_response_keeps_phase() {
    let client = MockProviderClient::scripted(vec![Err(ProviderError::new(
        ProviderErrorKind::Status {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        },
    ))]);

    let result = orchestrator(client).publish(&request(), &credentials()).await;

    assert_eq!(result.stage(), Some(PublishStage::ContainerCreation));
}

#[tokio::test]
async fn test_retry_after_container_failure_is_clean() {
    let client = MockProviderClient::scripted(vec![
        Ok(json!({"error": {"message": "Could not fetch image", "code": 9004}})),
        Ok(json!({"id": "17801"})),
        Ok(json!({"id": "998878"})),
    ]);
    let orchestrator = orchestrator(client.clone());

    let first = orchestrator.publish(&request(), &credentials()).await;
    let second = orchestrator.publish(&request(), &credentials()).await;

    assert_eq!(first.stage(), Some(PublishStage::ContainerCreation));
    assert_eq!(second.post_id(), Some("998878"));
    let calls = client.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].1, calls[1].1);
}

#[tokio::test]
async fn test_video_container_body() {
    let client = MockProviderClient::scripted(vec![
        Ok(json!({"id": "17800"})),
        Ok(json!({"id": "998877"})),
    ]);
    let request = PublishRequest::new("https://cdn.test/mug.mp4", "Reel time")
        .with_media_kind(MediaKind::Video);

    let result = orchestrator(client.clone()).publish(&request, &credentials()).await;

    assert!(result.is_success());
    let body = &client.calls()[0].1;
    assert_eq!(body["video_url"], "https://cdn.test/mug.mp4");
    assert_eq!(body["media_type"], "REELS");
    assert!(body.get("image_url").is_none());
}

#[test]
fn test_default_graph_endpoint() {
    let config = PlatformConfig::default();
    assert_eq!(
        config.container_url("1784"),
        "https://graph.facebook.com/v18.0/1784/media"
    );
    assert_eq!(
        config.publish_url("1784"),
        "https://graph.facebook.com/v18.0/1784/media_publish"
    );
}
