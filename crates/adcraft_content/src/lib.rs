//! Content generation for Adcraft.
//!
//! [`ContentGenerationEngine`] wraps a [`TextGenerator`] with a fixed
//! instructional template and treats whatever comes back as untrusted text:
//! the first JSON object is extracted from surrounding prose, decoded, and
//! validated into an [`AdContent`] or rejected with a typed error.
//!
//! [`TextGenerator`]: adcraft_interface::TextGenerator
//! [`AdContent`]: adcraft_core::AdContent

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod extraction;
mod hashtags;
mod prompt;

pub use engine::{ContentGenerationEngine, parse_ad_content};
pub use extraction::{extract_json, parse_json};
pub use hashtags::{normalize_hashtag, normalize_hashtags};
pub use prompt::build_instruction;
