//! HTTP image/video generation backend.

use adcraft_error::{AdcraftResult, SynthesisError};
use adcraft_interface::{ImageRequest, ProviderClient, SynthesisProvider, VideoRequest};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Synthesis provider backed by a remote generation API.
///
/// Speaks a minimal contract: `POST {base}/images` with
/// `{prompt, style, aspect_ratio}` and `POST {base}/videos` with
/// `{prompt, duration_seconds, aspect_ratio}`, both answering `{"url": ...}`
/// or `{"error": {"message": ...}}`.
#[derive(Clone)]
pub struct RemoteSynthesisProvider {
    client: Arc<dyn ProviderClient>,
    base_url: String,
    api_key: Option<String>,
}

impl RemoteSynthesisProvider {
    /// Create a provider for the backend at `base_url`.
    pub fn new(
        client: Arc<dyn ProviderClient>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn call(&self, path: &str, mut body: Value) -> AdcraftResult<String> {
        if let (Some(key), Some(map)) = (&self.api_key, body.as_object_mut()) {
            map.insert("api_key".to_string(), Value::String(key.clone()));
        }

        let url = format!("{}/{}", self.base_url, path);
        let payload = self
            .client
            .post_json(&url, &body)
            .await
            .map_err(|e| SynthesisError::failed(self.provider_name(), e))?;

        if let Some(error) = payload.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            warn!(message = %message, "Synthesis backend returned error");
            return Err(SynthesisError::failed(self.provider_name(), message).into());
        }

        match payload.get("url").and_then(Value::as_str) {
            Some(url) if !url.trim().is_empty() => {
                debug!(url = %url, "Synthesis backend returned asset");
                Ok(url.to_string())
            }
            _ => Err(SynthesisError::failed(self.provider_name(), "no url returned").into()),
        }
    }
}

#[async_trait]
impl SynthesisProvider for RemoteSynthesisProvider {
    #[instrument(skip(self, request), fields(provider = "remote", base_url = %self.base_url))]
    async fn generate_image(&self, request: &ImageRequest) -> AdcraftResult<String> {
        let body = json!({
            "prompt": request.prompt,
            "style": request.style,
            "aspect_ratio": request.aspect_ratio,
        });
        self.call("images", body).await
    }

    #[instrument(skip(self, request), fields(provider = "remote", base_url = %self.base_url))]
    async fn generate_video(&self, request: &VideoRequest) -> AdcraftResult<String> {
        let body = json!({
            "prompt": request.prompt,
            "duration_seconds": request.duration_seconds,
            "aspect_ratio": request.aspect_ratio,
        });
        self.call("videos", body).await
    }

    fn provider_name(&self) -> &str {
        "remote"
    }
}
