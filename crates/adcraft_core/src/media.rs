//! Media generation options and the assets synthesis produces.

use adcraft_error::{SynthesisError, SynthesisErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Shortest video a synthesis provider is asked for, in seconds.
pub const MIN_VIDEO_SECONDS: u8 = 3;
/// Longest video a synthesis provider is asked for, in seconds.
pub const MAX_VIDEO_SECONDS: u8 = 15;

/// Which assets a synthesis call should produce.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MediaRequestKind {
    /// A single image
    #[default]
    Image,
    /// A single video (with an implicit thumbnail image)
    Video,
    /// One image and one video
    Both,
}

impl MediaRequestKind {
    /// True when a video is part of the request.
    pub fn wants_video(&self) -> bool {
        !matches!(self, MediaRequestKind::Image)
    }

    /// True when an image is explicitly part of the request.
    pub fn wants_image(&self) -> bool {
        !matches!(self, MediaRequestKind::Video)
    }
}

/// Kind of a produced asset.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    #[default]
    Image,
    /// Video clip
    Video,
}

/// Output frame shape.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum AspectRatio {
    /// 1:1 feed post
    #[default]
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// 9:16 story / reel
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
    /// 16:9 landscape
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape,
}

fn default_style() -> String {
    "photorealistic".to_string()
}

/// Options controlling media synthesis.
///
/// `duration_seconds` must be set, within
/// [`MIN_VIDEO_SECONDS`]..=[`MAX_VIDEO_SECONDS`], exactly when a video is requested.
///
/// # Examples
///
/// ```
/// use adcraft_core::{AspectRatio, MediaGenerationOptionsBuilder, MediaRequestKind};
///
/// let options = MediaGenerationOptionsBuilder::default()
///     .prompt("morning coffee")
///     .kind(MediaRequestKind::Both)
///     .duration_seconds(Some(8))
///     .build()
///     .unwrap();
///
/// assert_eq!(options.style(), "photorealistic");
/// assert_eq!(options.aspect_ratio(), &AspectRatio::Square);
/// assert!(options.validate().is_ok());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct MediaGenerationOptions {
    /// Extra direction for the media, on top of the ad's media description.
    #[builder(default)]
    #[serde(default)]
    prompt: String,

    /// Which assets to produce.
    #[builder(default)]
    #[serde(default)]
    kind: MediaRequestKind,

    /// Rendering style passed to the image provider.
    #[builder(default = "default_style()")]
    #[serde(default = "default_style")]
    style: String,

    /// Frame shape.
    #[builder(default)]
    #[serde(default)]
    aspect_ratio: AspectRatio,

    /// Video length, required iff a video is requested.
    #[builder(default)]
    #[serde(default)]
    duration_seconds: Option<u8>,
}

impl Default for MediaGenerationOptions {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            kind: MediaRequestKind::Image,
            style: default_style(),
            aspect_ratio: AspectRatio::Square,
            duration_seconds: None,
        }
    }
}

impl MediaGenerationOptions {
    /// Check the duration invariant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptions` when a duration is missing for a video request,
    /// present for an image-only request, or outside the allowed range.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        match (self.kind.wants_video(), self.duration_seconds) {
            (true, None) => Err(SynthesisError::new(SynthesisErrorKind::InvalidOptions(
                format!("duration_seconds is required for kind '{}'", self.kind),
            ))),
            (false, Some(_)) => Err(SynthesisError::new(SynthesisErrorKind::InvalidOptions(
                "duration_seconds is only valid when a video is requested".to_string(),
            ))),
            (true, Some(secs)) if !(MIN_VIDEO_SECONDS..=MAX_VIDEO_SECONDS).contains(&secs) => {
                Err(SynthesisError::new(SynthesisErrorKind::InvalidOptions(
                    format!(
                        "duration_seconds must be between {} and {}, got {}",
                        MIN_VIDEO_SECONDS, MAX_VIDEO_SECONDS, secs
                    ),
                )))
            }
            _ => Ok(()),
        }
    }
}

/// A synthesized image or video.
///
/// Videos always carry a thumbnail; the constructors make any other shape
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MediaAssetFields")]
pub struct MediaAsset {
    /// Asset kind.
    kind: MediaKind,
    /// Resolvable location of the asset.
    url: String,
    /// What the asset depicts.
    description: String,
    /// Preview image, always present for videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaAssetFields {
    kind: MediaKind,
    url: String,
    description: String,
    #[serde(default)]
    thumbnail_url: Option<String>,
}

impl TryFrom<MediaAssetFields> for MediaAsset {
    type Error = String;

    fn try_from(fields: MediaAssetFields) -> Result<Self, Self::Error> {
        if fields.url.trim().is_empty() {
            return Err("asset url cannot be empty".to_string());
        }
        match (fields.kind, fields.thumbnail_url) {
            (MediaKind::Image, _) => Ok(Self::image(fields.url, fields.description)),
            (MediaKind::Video, Some(thumb)) if !thumb.trim().is_empty() => {
                Ok(Self::video(fields.url, fields.description, thumb))
            }
            (MediaKind::Video, _) => Err("video asset requires a thumbnailUrl".to_string()),
        }
    }
}

impl MediaAsset {
    /// Create an image asset.
    pub fn image(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
            description: description.into(),
            thumbnail_url: None,
        }
    }

    /// Create a video asset with its thumbnail.
    pub fn video(
        url: impl Into<String>,
        description: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
            description: description.into(),
            thumbnail_url: Some(thumbnail_url.into()),
        }
    }

    /// True for image assets.
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }
}
