//! Media synthesis provider capability.

use adcraft_core::AspectRatio;
use adcraft_error::AdcraftResult;
use async_trait::async_trait;

/// Image synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Full, enhanced prompt
    pub prompt: String,
    /// Rendering style (e.g., "photorealistic")
    pub style: String,
    /// Frame shape
    pub aspect_ratio: AspectRatio,
}

/// Video synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRequest {
    /// Full, enhanced prompt
    pub prompt: String,
    /// Clip length in seconds
    pub duration_seconds: u8,
    /// Frame shape
    pub aspect_ratio: AspectRatio,
}

/// Something that turns a text prompt into a generated media URL.
///
/// Real backends and deterministic stand-ins implement the same trait, so a
/// new provider is added by implementing it rather than by branching on a name.
#[async_trait]
pub trait SynthesisProvider: Send + Sync {
    /// Generate an image and return its URL.
    async fn generate_image(&self, request: &ImageRequest) -> AdcraftResult<String>;

    /// Generate a video and return its URL.
    async fn generate_video(&self, request: &VideoRequest) -> AdcraftResult<String>;

    /// Provider name used in errors and logs.
    fn provider_name(&self) -> &str;
}
