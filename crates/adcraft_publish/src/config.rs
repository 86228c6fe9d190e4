//! Platform endpoint settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Graph API root used when none is configured.
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com/v18.0";

fn default_graph_base_url() -> String {
    DEFAULT_GRAPH_BASE_URL.to_string()
}

/// Where the publish protocol is spoken.
///
/// # Examples
///
/// ```
/// use adcraft_publish::{PlatformConfig, PlatformConfigBuilder};
///
/// let config = PlatformConfigBuilder::default()
///     .graph_base_url("http://localhost:8080/v18.0/")
///     .build()
///     .unwrap();
/// assert_eq!(config.container_url("42"), "http://localhost:8080/v18.0/42/media");
/// assert!(!PlatformConfig::is_valid_account_id("42/media_publish"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PlatformConfig {
    /// Graph API root, without a trailing slash.
    #[builder(default = "default_graph_base_url()")]
    #[serde(default = "default_graph_base_url")]
    graph_base_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            graph_base_url: default_graph_base_url(),
        }
    }
}

impl PlatformConfig {
    /// Settings for the Graph API rooted at `graph_base_url`.
    pub fn new(graph_base_url: impl Into<String>) -> Self {
        Self {
            graph_base_url: graph_base_url.into(),
        }
    }

    fn base(&self) -> &str {
        self.graph_base_url.trim_end_matches('/')
    }

    /// True if `account_id` is a bare numeric Graph API id, safe to place in
    /// a URL path.
    pub fn is_valid_account_id(account_id: &str) -> bool {
        !account_id.is_empty() && account_id.bytes().all(|b| b.is_ascii_digit())
    }

    /// Container-creation endpoint for an account.
    ///
    /// `account_id` is placed in the path as given; check it with
    /// [`is_valid_account_id`](Self::is_valid_account_id) first.
    pub fn container_url(&self, account_id: &str) -> String {
        format!("{}/{}/media", self.base(), account_id)
    }

    /// Publish-commit endpoint for an account.
    pub fn publish_url(&self, account_id: &str) -> String {
        format!("{}/{}/media_publish", self.base(), account_id)
    }
}
