//! Structured ad copy produced by the content generation engine.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Visual style requested for the ad's media.
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
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MediaStyle {
    /// Clean, contemporary look (default)
    #[default]
    Modern,
    /// Sparse composition, lots of negative space
    Minimalist,
    /// Saturated, high-energy colours
    Vibrant,
    /// Corporate, understated
    Professional,
    /// Premium materials and lighting
    Luxury,
    /// Playful and light-hearted
    Fun,
    /// Curated, mood-board look
    Aesthetic,
}

/// Ad copy ready for media synthesis and publishing.
///
/// `caption` and `media_description` are never blank and `hashtags` holds at
/// least one `#`-prefixed entry, in relevance order.
///
/// # Examples
///
/// ```
/// use adcraft_core::{AdContentBuilder, MediaStyle};
///
/// let content = AdContentBuilder::default()
///     .caption("Sip in style")
///     .hashtags(vec!["#mugs".to_string(), "#ceramic".to_string()])
///     .media_description("a blue mug on a wood table")
///     .build()
///     .unwrap();
///
/// assert_eq!(content.media_style(), &MediaStyle::Modern);
/// assert_eq!(content.full_caption(), "Sip in style\n\n#mugs #ceramic");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase", try_from = "AdContentFields")]
pub struct AdContent {
    /// Post caption without hashtags.
    caption: String,

    /// Hashtags in relevance order, each starting with `#`.
    hashtags: Vec<String>,

    /// Description of the image or video to accompany the post.
    media_description: String,

    /// Visual style for the media.
    #[builder(default)]
    #[serde(default)]
    media_style: MediaStyle,

    /// Tone of voice inferred from the prompt.
    #[builder(default)]
    #[serde(default)]
    tone: Option<String>,

    /// Product category inferred from the prompt.
    #[builder(default)]
    #[serde(default)]
    product_category: Option<String>,
}

impl AdContentBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.caption.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err("caption cannot be empty".to_string());
        }
        if self
            .media_description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            return Err("media_description cannot be empty".to_string());
        }
        if let Some(tags) = &self.hashtags {
            if tags.is_empty() {
                return Err("at least one hashtag is required".to_string());
            }
            if let Some(bad) = tags.iter().find(|t| !t.starts_with('#') || t.len() < 2) {
                return Err(format!("hashtag '{}' must start with '#'", bad));
            }
        }
        Ok(())
    }
}

/// Serialized form of [`AdContent`], checked by the builder on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdContentFields {
    caption: String,
    hashtags: Vec<String>,
    media_description: String,
    #[serde(default)]
    media_style: MediaStyle,
    #[serde(default)]
    tone: Option<String>,
    #[serde(default)]
    product_category: Option<String>,
}

impl TryFrom<AdContentFields> for AdContent {
    type Error = AdContentBuilderError;

    fn try_from(fields: AdContentFields) -> Result<Self, Self::Error> {
        AdContentBuilder::default()
            .caption(fields.caption)
            .hashtags(fields.hashtags)
            .media_description(fields.media_description)
            .media_style(fields.media_style)
            .tone(fields.tone)
            .product_category(fields.product_category)
            .build()
    }
}

impl AdContent {
    /// Caption followed by a blank line and the space-separated hashtags.
    pub fn full_caption(&self) -> String {
        format!("{}\n\n{}", self.caption, self.hashtags.join(" "))
    }
}
