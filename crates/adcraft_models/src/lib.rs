//! Provider integrations for Adcraft.
//!
//! - [`HttpProviderClient`] is the reqwest-backed [`ProviderClient`] every
//!   remote integration sends its JSON through.
//! - [`GeminiClient`] is a [`TextGenerator`] backed by the Gemini
//!   `generateContent` REST endpoint.
//!
//! [`ProviderClient`]: adcraft_interface::ProviderClient
//! [`TextGenerator`]: adcraft_interface::TextGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod http;

pub use gemini::{DEFAULT_GEMINI_MODEL, GEMINI_API_BASE, GeminiClient};
pub use http::{DEFAULT_TIMEOUT, HttpProviderClient, redact_url};
