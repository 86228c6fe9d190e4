//! Low-level provider contracts.

use async_trait::async_trait;
use adcraft_error::{AdcraftResult, ProviderError};
use serde_json::Value;

/// Thin contract for calling an external HTTP API with JSON bodies.
///
/// Implementations carry no business logic. They must return the decoded
/// JSON body even for non-success statuses when the body is JSON, so that
/// protocol-level error payloads reach the caller intact.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// POST `body` as JSON to `url` and decode the JSON reply.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ProviderError>;
}

/// A language model that answers a text prompt with free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    async fn generate_text(&self, prompt: &str) -> AdcraftResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;

    /// False when no credential is configured; callers must not dispatch then.
    fn is_configured(&self) -> bool {
        true
    }
}
