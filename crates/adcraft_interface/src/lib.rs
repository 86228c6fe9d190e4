//! Trait definitions for the Adcraft pipeline.
//!
//! Every external collaborator sits behind one of these traits so that real
//! backends and test doubles are interchangeable:
//!
//! - [`ProviderClient`] sends JSON to an HTTP API and returns JSON
//! - [`TextGenerator`] turns an instructional prompt into model text
//! - [`SynthesisProvider`] turns a prompt into an image or video URL
//! - [`Store`] and [`UserDirectory`] front the persistence and identity layers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod provider;
mod store;
mod synthesis;

pub use provider::{ProviderClient, TextGenerator};
pub use store::{Store, UserDirectory};
pub use synthesis::{ImageRequest, SynthesisProvider, VideoRequest};
