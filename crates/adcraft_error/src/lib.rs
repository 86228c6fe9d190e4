//! Error types for the Adcraft pipeline.
//!
//! This crate provides the error types shared by every Adcraft crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Every error also maps onto an [`ErrorCategory`], so callers can render an
//! actionable message (ask for credentials, retry later, report a bad reply)
//! without matching on provider text.
//!
//! # Examples
//!
//! ```
//! use adcraft_error::{AdcraftResult, ConfigError, ErrorCategory};
//!
//! fn load() -> AdcraftResult<String> {
//!     Err(ConfigError::new("llm.api_key is not set"))?
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Configuration);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod config;
mod error;
mod generation;
mod provider;
mod store;
mod synthesis;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use error::{AdcraftError, AdcraftErrorKind, AdcraftResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use synthesis::{SynthesisError, SynthesisErrorKind};
