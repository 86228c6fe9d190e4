use super::dto::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};
use adcraft_error::{AdcraftResult, GenerationError, GenerationErrorKind};
use adcraft_interface::{ProviderClient, TextGenerator};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Base URL of the Gemini REST API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Gemini text generation client.
///
/// Holds an optional API key: a client without one reports
/// `is_configured() == false` and refuses to dispatch requests.
#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<dyn ProviderClient>,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: Option<f32>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `client` - JSON transport
    /// * `api_key` - Gemini API key, if one is configured
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash")
    pub fn new(
        client: Arc<dyn ProviderClient>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
            temperature: None,
        }
    }

    /// Creates a client reading the key from `GEMINI_API_KEY`.
    pub fn from_env(client: Arc<dyn ProviderClient>, model: impl Into<String>) -> Self {
        Self::new(client, std::env::var("GEMINI_API_KEY").ok(), model)
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        )
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: self.temperature.map(|temperature| GenerationConfig {
                temperature: Some(temperature),
            }),
        }
    }

    /// Pulls the first candidate's text out of a response payload.
    fn extract_text(payload: serde_json::Value) -> AdcraftResult<String> {
        if payload.get("error").is_some() {
            let message = match serde_json::from_value::<ApiErrorEnvelope>(payload) {
                Ok(envelope) => {
                    let err = envelope.error;
                    format!(
                        "{} (code: {}, status: {})",
                        err.message.unwrap_or_else(|| "unknown error".to_string()),
                        err.code.map(|c| c.to_string()).unwrap_or_default(),
                        err.status.unwrap_or_default()
                    )
                }
                Err(e) => format!("unreadable error payload: {}", e),
            };
            error!(message = %message, "Gemini API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Upstream(message)).into());
        }

        let response: GenerateContentResponse = serde_json::from_value(payload).map_err(|e| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "unexpected Gemini response shape: {}",
                e
            )))
        })?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::MalformedResponse(
                "Gemini response contained no text".to_string(),
            ))
            .into());
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(provider = "gemini", model = %self.model, prompt_len = prompt.len()))]
    async fn generate_text(&self, prompt: &str) -> AdcraftResult<String> {
        let Some(api_key) = self.api_key() else {
            return Err(GenerationError::new(GenerationErrorKind::UninitializedProvider).into());
        };

        let body = serde_json::to_value(self.build_request(prompt)).map_err(|e| {
            GenerationError::new(GenerationErrorKind::Upstream(format!(
                "Failed to encode request: {}",
                e
            )))
        })?;

        debug!("Sending request to Gemini API");
        let payload = self.client.post_json(&self.endpoint(api_key), &body).await?;
        let text = Self::extract_text(payload)?;
        debug!(response_len = text.len(), "Received response from Gemini");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}
