//! Core data types for the Adcraft pipeline.
//!
//! These are the values that flow from the content generation engine through
//! media synthesis to the publish orchestrator. All of them are immutable once
//! built; the builders and constructors enforce their invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod credentials;
mod media;
mod publish;
mod record;

pub use content::{AdContent, AdContentBuilder, AdContentBuilderError, MediaStyle};
pub use credentials::{CurrentUser, PlatformCredentials};
pub use media::{
    AspectRatio, MAX_VIDEO_SECONDS, MIN_VIDEO_SECONDS, MediaAsset, MediaGenerationOptions,
    MediaGenerationOptionsBuilder, MediaGenerationOptionsBuilderError, MediaKind,
    MediaRequestKind,
};
pub use publish::{PublishRequest, PublishResult, PublishStage};
pub use record::AdRecord;
