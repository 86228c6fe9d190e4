//! Layered application configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`adcraft.toml` shipped with the crate)
//! 2. `~/.config/adcraft/adcraft.toml`
//! 3. `./adcraft.toml`
//! 4. An explicit file passed by the caller
//! 5. `ADCRAFT__SECTION__KEY` environment variables
//!
//! Well-known secret variables (`GEMINI_API_KEY`, `INSTAGRAM_ACCESS_TOKEN`,
//! `INSTAGRAM_ACCOUNT_ID`) fill any value still missing after that.

use adcraft_core::PlatformCredentials;
use adcraft_error::{AdcraftError, AdcraftResult, ConfigError};
use adcraft_publish::PlatformConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../adcraft.toml");

/// Opaque secret value that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap a secret.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The secret itself.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Which synthesis backend to use.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MediaProviderKind {
    /// Deterministic stock library
    #[default]
    Stock,
    /// HTTP generation backend at `media.base_url`
    Remote,
}

fn default_llm_model() -> String {
    adcraft_models::DEFAULT_GEMINI_MODEL.to_string()
}

fn default_llm_base_url() -> String {
    adcraft_models::GEMINI_API_BASE.to_string()
}

fn default_llm_timeout() -> u64 {
    30
}

fn default_media_timeout() -> u64 {
    120
}

fn default_platform_timeout() -> u64 {
    30
}

fn default_graph_base_url() -> String {
    adcraft_publish::DEFAULT_GRAPH_BASE_URL.to_string()
}

/// `[llm]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Gemini API key
    #[serde(default)]
    pub api_key: Option<Secret>,
    /// Model identifier
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// API root
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_llm_model(),
            base_url: default_llm_base_url(),
            timeout_secs: default_llm_timeout(),
            temperature: None,
        }
    }
}

impl LlmConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[media]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Synthesis backend
    #[serde(default)]
    pub provider: MediaProviderKind,
    /// Remote backend root, required for `remote`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Remote backend key
    #[serde(default)]
    pub api_key: Option<Secret>,
    /// Per-request timeout in seconds
    #[serde(default = "default_media_timeout")]
    pub timeout_secs: u64,
    /// Artificial delay for the stock provider, in milliseconds
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            provider: MediaProviderKind::Stock,
            base_url: None,
            api_key: None,
            timeout_secs: default_media_timeout(),
            simulated_latency_ms: 0,
        }
    }
}

impl MediaConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Stock provider delay.
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

/// `[platform]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSettings {
    /// Platform access token
    #[serde(default)]
    pub access_token: Option<Secret>,
    /// Target account id
    #[serde(default)]
    pub account_id: Option<String>,
    /// Graph API root
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_platform_timeout")]
    pub timeout_secs: u64,
    /// Image published when no asset was synthesized
    #[serde(default)]
    pub fallback_media_url: Option<String>,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            account_id: None,
            graph_base_url: default_graph_base_url(),
            timeout_secs: default_platform_timeout(),
            fallback_media_url: None,
        }
    }
}

impl PlatformSettings {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Credentials as configured; either value may be missing.
    pub fn credentials(&self) -> PlatformCredentials {
        PlatformCredentials {
            token: self.access_token.as_ref().map(|s| s.expose().to_string()),
            account_id: self.account_id.clone(),
        }
    }

    /// Endpoint settings for the publish orchestrator.
    pub fn endpoint(&self) -> PlatformConfig {
        PlatformConfig::new(self.graph_base_url.clone())
    }
}

/// Top-level Adcraft configuration.
///
/// # Example
///
/// ```no_run
/// use adcraft::AdcraftConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AdcraftConfig::load(None)?;
/// println!("LLM model: {}", config.llm.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdcraftConfig {
    /// LLM settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Media synthesis settings
    #[serde(default)]
    pub media: MediaConfig,
    /// Publishing platform settings
    #[serde(default)]
    pub platform: PlatformSettings,
}

impl AdcraftConfig {
    /// Load bundled defaults overlaid with a single file.
    ///
    /// Neither user files nor the environment are consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> AdcraftResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration from every source, then apply secret fallbacks.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed, an explicit file
    /// is missing, or a value has the wrong type.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> AdcraftResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled");

        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/adcraft/adcraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("adcraft").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ADCRAFT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Ok(Self::finish(builder)?.with_env_fallbacks(|name| std::env::var(name).ok()))
    }

    /// Fill missing secrets from well-known variables.
    ///
    /// `lookup` resolves a variable name; blank values are ignored.
    pub fn with_env_fallbacks(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if self.llm.api_key.is_none() {
            self.llm.api_key = present("GEMINI_API_KEY").map(Secret::new);
        }
        if self.platform.access_token.is_none() {
            self.platform.access_token = present("INSTAGRAM_ACCESS_TOKEN").map(Secret::new);
        }
        if self.platform.account_id.is_none() {
            self.platform.account_id = present("INSTAGRAM_ACCOUNT_ID");
        }
        self
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> AdcraftResult<Self> {
        builder
            .build()
            .map_err(|e| {
                AdcraftError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                AdcraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
