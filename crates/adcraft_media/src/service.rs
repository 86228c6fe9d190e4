//! Provider-agnostic synthesis service.

use adcraft_core::{AdContent, MediaAsset, MediaGenerationOptions};
use adcraft_error::{AdcraftError, AdcraftErrorKind, AdcraftResult, SynthesisError, SynthesisErrorKind};
use adcraft_interface::{ImageRequest, SynthesisProvider, VideoRequest};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Fixed quality/style suffix appended to every synthesis prompt.
pub const QUALITY_SUFFIX: &str =
    "high quality, professional advertising shot, sharp focus, balanced lighting, social media ready";

/// Build the prompt sent to synthesis providers.
///
/// Concatenates the media description, any extra direction from the options,
/// the content's media style and [`QUALITY_SUFFIX`].
///
/// # Examples
///
/// ```
/// use adcraft_core::{AdContentBuilder, MediaGenerationOptions};
/// use adcraft_media::enhanced_prompt;
///
/// let content = AdContentBuilder::default()
///     .caption("Sip in style")
///     .hashtags(vec!["#mugs".to_string()])
///     .media_description("a blue mug on a wood table")
///     .build()
///     .unwrap();
///
/// let prompt = enhanced_prompt(&content, &MediaGenerationOptions::default());
/// assert!(prompt.starts_with("a blue mug on a wood table, modern style, "));
/// ```
pub fn enhanced_prompt(content: &AdContent, options: &MediaGenerationOptions) -> String {
    let mut parts: Vec<String> = vec![content.media_description().trim().to_string()];
    let extra = options.prompt().trim();
    if !extra.is_empty() {
        parts.push(extra.to_string());
    }
    parts.push(format!("{} style", content.media_style()));
    parts.push(QUALITY_SUFFIX.to_string());
    parts.join(", ")
}

/// Produces media assets for ad content.
///
/// Either every requested asset is produced or the call fails; a `both`
/// request never yields an image on its own.
#[derive(Clone)]
pub struct MediaSynthesisService {
    image_provider: Arc<dyn SynthesisProvider>,
    video_provider: Arc<dyn SynthesisProvider>,
}

impl MediaSynthesisService {
    /// Use one provider for both images and videos.
    pub fn new(provider: Arc<dyn SynthesisProvider>) -> Self {
        Self {
            image_provider: provider.clone(),
            video_provider: provider,
        }
    }

    /// Use separate providers for images and videos.
    pub fn with_providers(
        image_provider: Arc<dyn SynthesisProvider>,
        video_provider: Arc<dyn SynthesisProvider>,
    ) -> Self {
        Self {
            image_provider,
            video_provider,
        }
    }

    /// Synthesize the assets requested by `options`.
    ///
    /// Returns `[image]`, `[video]` or `[image, video]`. Videos always carry a
    /// thumbnail: the image from the same call when there is one, otherwise an
    /// extra image synthesized for the purpose.
    ///
    /// # Errors
    ///
    /// - `InvalidOptions` if the options violate their invariants
    /// - `SynthesisFailed` if any required provider call fails
    #[instrument(skip(self, content, options), fields(kind = %options.kind()))]
    pub async fn synthesize(
        &self,
        content: &AdContent,
        options: &MediaGenerationOptions,
    ) -> AdcraftResult<Vec<MediaAsset>> {
        options.validate()?;

        let prompt = enhanced_prompt(content, options);
        let description = content.media_description().clone();
        debug!(prompt_len = prompt.len(), "Synthesizing media");

        let mut assets = Vec::with_capacity(2);

        let image_url = if options.kind().wants_image() {
            Some(self.image(&prompt, options).await?)
        } else {
            None
        };
        if let Some(url) = &image_url {
            assets.push(MediaAsset::image(url.clone(), description.clone()));
        }

        if options.kind().wants_video() {
            let duration_seconds = options.duration_seconds().ok_or_else(|| {
                SynthesisError::new(SynthesisErrorKind::InvalidOptions(
                    "duration_seconds is required for video".to_string(),
                ))
            })?;
            let video_url = self.video(&prompt, duration_seconds, options).await?;
            let thumbnail_url = match image_url {
                Some(url) => url,
                None => {
                    debug!("Synthesizing thumbnail for video");
                    self.image(&prompt, options).await?
                }
            };
            assets.push(MediaAsset::video(video_url, description, thumbnail_url));
        }

        info!(assets = assets.len(), "Media synthesis complete");
        Ok(assets)
    }

    async fn image(&self, prompt: &str, options: &MediaGenerationOptions) -> AdcraftResult<String> {
        let request = ImageRequest {
            prompt: prompt.to_string(),
            style: options.style().clone(),
            aspect_ratio: *options.aspect_ratio(),
        };
        self.image_provider
            .generate_image(&request)
            .await
            .map_err(|e| synthesis_failed(self.image_provider.provider_name(), e))
    }

    async fn video(
        &self,
        prompt: &str,
        duration_seconds: u8,
        options: &MediaGenerationOptions,
    ) -> AdcraftResult<String> {
        let request = VideoRequest {
            prompt: prompt.to_string(),
            duration_seconds,
            aspect_ratio: *options.aspect_ratio(),
        };
        self.video_provider
            .generate_video(&request)
            .await
            .map_err(|e| synthesis_failed(self.video_provider.provider_name(), e))
    }
}

/// Normalise any provider failure into `SynthesisFailed`.
fn synthesis_failed(provider: &str, e: AdcraftError) -> AdcraftError {
    if let AdcraftErrorKind::Synthesis(inner) = e.kind() {
        if matches!(inner.kind, SynthesisErrorKind::SynthesisFailed { .. }) {
            return e;
        }
    }
    error!(provider = %provider, error = %e, "Synthesis provider failed");
    SynthesisError::failed(provider, e).into()
}
