//! Adcraft: AI-assisted ad content and publish pipeline.
//!
//! A free-text prompt becomes structured ad copy (via an LLM), optionally a
//! matching image or video, and finally a post on the target platform via
//! its two-phase container/commit API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use adcraft::{AdPipeline, AdcraftConfig, PipelineRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AdcraftConfig::load(None)?;
//!     let pipeline = AdPipeline::from_config(&config)?;
//!
//!     let outcome = pipeline
//!         .run(PipelineRequest {
//!             prompt: "promote a blue ceramic mug".to_string(),
//!             media_options: Some(Default::default()),
//!             credentials: config.platform.credentials(),
//!         })
//!         .await?;
//!
//!     println!("{:?}", outcome.result());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `adcraft_error` - Error types and the failure taxonomy
//! - `adcraft_core` - Data model
//! - `adcraft_interface` - Capability traits
//! - `adcraft_models` - HTTP transport and the Gemini text generator
//! - `adcraft_content` - Content generation engine
//! - `adcraft_media` - Media synthesis service and providers
//! - `adcraft_publish` - Publish orchestrator
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod pipeline;
mod store;

pub use config::{
    AdcraftConfig, LlmConfig, MediaConfig, MediaProviderKind, PlatformSettings, Secret,
};
pub use observability::{ObservabilityConfig, init_observability};
pub use pipeline::{
    AdDraft, AdPipeline, DEFAULT_FALLBACK_MEDIA_URL, PipelineOutcome, PipelineRequest,
};
pub use store::{InMemoryStore, StaticUserDirectory};

pub use adcraft_content::*;
pub use adcraft_core::*;
pub use adcraft_error::*;
pub use adcraft_interface::*;
pub use adcraft_media::*;
pub use adcraft_models::*;
pub use adcraft_publish::*;
