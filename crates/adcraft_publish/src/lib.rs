//! Publishing for Adcraft.
//!
//! [`PublishOrchestrator`] drives the platform's two-phase content API
//! (create a media container, then commit it as a post) and reports a single
//! terminal [`PublishResult`] naming the phase that failed.
//!
//! [`PublishResult`]: adcraft_core::PublishResult

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod orchestrator;

pub use config::{DEFAULT_GRAPH_BASE_URL, PlatformConfig, PlatformConfigBuilder, PlatformConfigBuilderError};
pub use orchestrator::{INVALID_ACCOUNT_ID, MISSING_CREDENTIALS, PublishOrchestrator};
