//! Two-phase publish state machine.

use crate::PlatformConfig;
use adcraft_core::{MediaKind, PlatformCredentials, PublishRequest, PublishResult, PublishStage};
use adcraft_error::ProviderError;
use adcraft_interface::ProviderClient;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Reason reported when the token or account id is absent.
pub const MISSING_CREDENTIALS: &str = "missing credentials";

/// Reason reported when the account id is not a numeric Graph API id.
pub const INVALID_ACCOUNT_ID: &str = "invalid account id";

/// Makes the platform's container-then-commit protocol look atomic.
///
/// One call in, one terminal [`PublishResult`] out. Nothing is retried: a
/// failed container leaves no state behind, so the caller may simply call
/// [`publish`](Self::publish) again.
#[derive(Clone)]
pub struct PublishOrchestrator {
    client: Arc<dyn ProviderClient>,
    config: PlatformConfig,
}

impl std::fmt::Debug for PublishOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishOrchestrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PublishOrchestrator {
    /// Create an orchestrator speaking to the configured Graph API.
    pub fn new(client: Arc<dyn ProviderClient>, config: PlatformConfig) -> Self {
        Self { client, config }
    }

    /// Endpoint settings in use.
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Publish `request` to the account named in `credentials`.
    ///
    /// Missing credentials and a non-numeric account id fail in the container
    /// phase without any network call. Provider error payloads and missing ids fail in the phase that
    /// produced them; timeouts and connection failures fail as `transport`.
    #[instrument(skip(self, request, credentials), fields(media_kind = %request.media_kind))]
    pub async fn publish(
        &self,
        request: &PublishRequest,
        credentials: &PlatformCredentials,
    ) -> PublishResult {
        let (Some(token), Some(account_id)) = (credentials.token(), credentials.account_id())
        else {
            warn!("Publish attempted without credentials");
            return PublishResult::failure(
                PublishStage::ContainerCreation,
                MISSING_CREDENTIALS,
                None,
            );
        };

        if !PlatformConfig::is_valid_account_id(account_id) {
            warn!("Publish attempted with a non-numeric account id");
            return PublishResult::failure(
                PublishStage::ContainerCreation,
                INVALID_ACCOUNT_ID,
                None,
            );
        }

        if request.media_url.trim().is_empty() {
            warn!("Publish attempted without a media url");
            return PublishResult::failure(
                PublishStage::ContainerCreation,
                "missing media url",
                None,
            );
        }

        let creation_id = match self.create_container(request, token, account_id).await {
            Ok(id) => id,
            Err(failure) => return failure,
        };
        debug!(creation_id = %creation_id, "Container created");

        match self.commit(&creation_id, token, account_id).await {
            Ok(post_id) => {
                info!(post_id = %post_id, "Post published");
                PublishResult::success(post_id)
            }
            Err(failure) => failure,
        }
    }

    async fn create_container(
        &self,
        request: &PublishRequest,
        token: &str,
        account_id: &str,
    ) -> Result<String, PublishResult> {
        let mut body = Map::new();
        match request.media_kind {
            MediaKind::Image => {
                body.insert("image_url".into(), json!(request.media_url));
            }
            MediaKind::Video => {
                body.insert("video_url".into(), json!(request.media_url));
                body.insert("media_type".into(), json!("REELS"));
            }
        }
        body.insert("caption".into(), json!(request.caption));
        body.insert("access_token".into(), json!(token));

        debug!("Creating media container");
        let response = self
            .client
            .post_json(&self.config.container_url(account_id), &Value::Object(body))
            .await;
        created_id(
            PublishStage::ContainerCreation,
            response,
            "no container id returned",
        )
    }

    async fn commit(
        &self,
        creation_id: &str,
        token: &str,
        account_id: &str,
    ) -> Result<String, PublishResult> {
        let body = json!({
            "creation_id": creation_id,
            "access_token": token,
        });

        debug!("Committing container");
        let response = self
            .client
            .post_json(&self.config.publish_url(account_id), &body)
            .await;
        created_id(PublishStage::PublishCommit, response, "no post id returned")
    }
}

/// Classify one protocol step's response into the id it created or a failure.
fn created_id(
    stage: PublishStage,
    response: Result<Value, ProviderError>,
    missing_id: &str,
) -> Result<String, PublishResult> {
    let payload = match response {
        Ok(payload) => payload,
        Err(e) if e.is_transport() => {
            warn!(stage = %stage, error = %e, "Transport failure");
            return Err(PublishResult::failure(
                PublishStage::Transport,
                e.kind().to_string(),
                None,
            ));
        }
        Err(e) => {
            warn!(stage = %stage, error = %e, "Unusable provider response");
            return Err(PublishResult::failure(stage, e.kind().to_string(), None));
        }
    };

    if let Some(error) = payload.get("error") {
        let reason = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        let code = error.get("code").and_then(scalar_string);
        warn!(stage = %stage, reason = %reason, code = ?code, "Provider rejected request");
        return Err(PublishResult::failure(stage, reason, code));
    }

    match payload.get("id").and_then(scalar_string) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => {
            warn!(stage = %stage, "Provider response carried no id");
            Err(PublishResult::failure(stage, missing_id, None))
        }
    }
}

/// Ids and codes arrive as either strings or numbers.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcraft_error::ProviderErrorKind;

    #[test]
    fn test_scalar_string() {
        assert_eq!(scalar_string(&json!("17800")), Some("17800".to_string()));
        assert_eq!(scalar_string(&json!(190)), Some("190".to_string()));
        assert_eq!(scalar_string(&json!(null)), None);
        assert_eq!(scalar_string(&json!({"a": 1})), None);
    }

    #[test]
    fn test_status_error_keeps_stage() {
        let response = Err(ProviderError::new(ProviderErrorKind::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        }));
        let failure = created_id(PublishStage::PublishCommit, response, "none").unwrap_err();
        assert_eq!(failure.stage(), Some(PublishStage::PublishCommit));
    }

    #[test]
    fn test_timeout_is_transport() {
        let response = Err(ProviderError::new(ProviderErrorKind::Timeout));
        let failure = created_id(PublishStage::ContainerCreation, response, "none").unwrap_err();
        assert_eq!(failure.stage(), Some(PublishStage::Transport));
    }
}
