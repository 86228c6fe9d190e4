//! reqwest-backed JSON provider client.

use adcraft_error::{ProviderError, ProviderErrorKind};
use adcraft_interface::ProviderClient;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_ERROR_BODY: usize = 512;

/// JSON-over-HTTP client with an explicit per-request timeout.
///
/// Bodies are decoded as JSON regardless of status code. Platforms such as the
/// Graph API deliver `{"error": {...}}` payloads with 4xx statuses and the
/// protocol layer needs to see them.
#[derive(Debug, Clone)]
pub struct HttpProviderClient {
    client: Client,
}

impl HttpProviderClient {
    /// Creates a client whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        debug!(timeout_secs = timeout.as_secs(), "Creating HTTP provider client");
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ProviderError::new(ProviderErrorKind::Request(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProviderClient for HttpProviderClient {
    #[instrument(skip(self, url, body), fields(url = %redact_url(url)))]
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ProviderError> {
        debug!("Sending provider request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, "Provider request failed");
                classify(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, status = %status, "Failed to read provider response");
            classify(e)
        })?;

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => {
                if !status.is_success() {
                    warn!(status = %status, "Provider returned error status with JSON body");
                }
                debug!(status = %status, "Received provider response");
                Ok(value)
            }
            Err(e) if status.is_success() => {
                error!(error = %e, "Provider response is not valid JSON");
                Err(ProviderError::new(ProviderErrorKind::Decode(e.to_string())))
            }
            Err(_) => {
                error!(status = %status, "Provider returned non-JSON error body");
                Err(ProviderError::new(ProviderErrorKind::Status {
                    status: status.as_u16(),
                    body: truncate(&text, MAX_ERROR_BODY),
                }))
            }
        }
    }
}

/// Maps a reqwest failure onto the provider error taxonomy.
///
/// Callers strip the URL first; it may carry an API key in its query.
#[track_caller]
fn classify(e: reqwest::Error) -> ProviderError {
    let kind = if e.is_timeout() {
        ProviderErrorKind::Timeout
    } else if e.is_connect() {
        ProviderErrorKind::Connection(e.to_string())
    } else if e.is_decode() {
        ProviderErrorKind::Decode(e.to_string())
    } else {
        ProviderErrorKind::Request(e.to_string())
    };
    ProviderError::new(kind)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Strips the query string so API keys passed as parameters never reach logs.
///
/// # Examples
///
/// ```
/// use adcraft_models::redact_url;
///
/// assert_eq!(
///     redact_url("https://api.example.com/v1/models/x:generateContent?key=secret"),
///     "https://api.example.com/v1/models/x:generateContent"
/// );
/// ```
pub fn redact_url(url: &str) -> &str {
    url.split_once('?').map(|(base, _)| base).unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("☕☕☕", 2), "☕☕");
        assert_eq!(truncate("short", 100), "short");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = HttpProviderClient::new(Duration::from_secs(2)).expect("Client builds");
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let result = client
            .post_json("http://127.0.0.1:9/media", &serde_json::json!({}))
            .await;

        let err = result.expect_err("Request should fail");
        assert!(err.is_transport(), "unexpected kind: {}", err);
    }

    #[tokio::test]
    async fn test_failed_request_does_not_expose_query_key() {
        let client = HttpProviderClient::new(Duration::from_secs(2)).expect("Client builds");
        let result = client
            .post_json(
                "http://127.0.0.1:9/models/x:generateContent?key=SUPERSECRET",
                &serde_json::json!({}),
            )
            .await;

        let err = result.expect_err("Request should fail");
        assert!(!err.to_string().contains("SUPERSECRET"), "key leaked: {}", err);
        assert!(!format!("{:?}", err).contains("SUPERSECRET"), "key leaked: {:?}", err);
    }
}
