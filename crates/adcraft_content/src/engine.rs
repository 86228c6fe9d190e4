//! Prompt → `AdContent` engine.

use crate::{build_instruction, extract_json, normalize_hashtags, parse_json};
use adcraft_core::{AdContent, AdContentBuilder, MediaStyle};
use adcraft_error::{AdcraftErrorKind, AdcraftResult, GenerationError, GenerationErrorKind};
use adcraft_interface::TextGenerator;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Hashtags as models actually return them: usually a list, sometimes one string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawHashtags {
    List(Vec<String>),
    Text(String),
}

impl RawHashtags {
    fn into_tags(self) -> Vec<String> {
        match self {
            RawHashtags::List(tags) => normalize_hashtags(tags),
            RawHashtags::Text(text) => {
                normalize_hashtags(text.split(|c: char| c.is_whitespace() || c == ','))
            }
        }
    }
}

/// The model's JSON object before validation. Unknown fields (such as
/// `platform`) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAdContent {
    caption: Option<String>,
    hashtags: Option<RawHashtags>,
    #[serde(alias = "media_description")]
    media_description: Option<String>,
    #[serde(alias = "media_style")]
    media_style: Option<String>,
    tone: Option<String>,
    #[serde(alias = "product_category")]
    product_category: Option<String>,
}

#[track_caller]
fn malformed(message: impl Into<String>) -> GenerationError {
    GenerationError::new(GenerationErrorKind::MalformedResponse(message.into()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse raw model output into validated ad content.
///
/// Tolerates prose around the JSON, hashtags without `#`, and a missing or
/// unknown `mediaStyle` (which becomes `modern`). Rejects output with no JSON
/// object or missing `caption`, `hashtags` or `mediaDescription`.
///
/// # Errors
///
/// Returns `MalformedResponse` for anything structurally incomplete.
///
/// # Examples
///
/// ```
/// use adcraft_content::parse_ad_content;
///
/// let raw = r#"Sure! {"caption":"Sip in style","hashtags":["mugs"],"mediaDescription":"a blue mug"}"#;
/// let content = parse_ad_content(raw).unwrap();
/// assert_eq!(content.hashtags(), &vec!["#mugs".to_string()]);
/// ```
pub fn parse_ad_content(raw: &str) -> Result<AdContent, GenerationError> {
    let json = extract_json(raw)?;
    let parsed: RawAdContent = parse_json(json)?;

    let caption = non_blank(parsed.caption).ok_or_else(|| malformed("missing field 'caption'"))?;
    let media_description = non_blank(parsed.media_description)
        .ok_or_else(|| malformed("missing field 'mediaDescription'"))?;
    let hashtags = parsed
        .hashtags
        .ok_or_else(|| malformed("missing field 'hashtags'"))?
        .into_tags();
    if hashtags.is_empty() {
        return Err(malformed("field 'hashtags' contains no usable entries"));
    }

    let media_style = match non_blank(parsed.media_style) {
        Some(style) => style.parse::<MediaStyle>().unwrap_or_else(|_| {
            warn!(style = %style, "Unknown media style from model, using default");
            MediaStyle::default()
        }),
        None => MediaStyle::default(),
    };

    AdContentBuilder::default()
        .caption(caption)
        .hashtags(hashtags)
        .media_description(media_description)
        .media_style(media_style)
        .tone(non_blank(parsed.tone))
        .product_category(non_blank(parsed.product_category))
        .build()
        .map_err(|e| malformed(e.to_string()))
}

/// Turns free-text prompts into structured ad content via an LLM.
#[derive(Clone)]
pub struct ContentGenerationEngine {
    generator: Arc<dyn TextGenerator>,
}

impl ContentGenerationEngine {
    /// Create an engine on top of a text generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate ad content for `prompt`.
    ///
    /// # Errors
    ///
    /// - `EmptyPrompt` if the prompt is blank
    /// - `UninitializedProvider` if the generator has no credential; no call is made
    /// - `ProviderError` passed through unchanged if the call fails below the
    ///   protocol layer (timeout, connection, undecodable status), so its
    ///   category stays transport or upstream protocol
    /// - `Upstream` for an error payload from the provider, or for any other
    ///   failure the generator reports
    /// - `MalformedResponse` if the reply cannot be trusted
    #[instrument(
        skip(self, prompt),
        fields(
            provider = self.generator.provider_name(),
            model = %self.generator.model_name(),
            prompt_len = prompt.len()
        )
    )]
    pub async fn generate(&self, prompt: &str) -> AdcraftResult<AdContent> {
        if prompt.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyPrompt).into());
        }
        if !self.generator.is_configured() {
            warn!("Content generation requested without an LLM credential");
            return Err(GenerationError::new(GenerationErrorKind::UninitializedProvider).into());
        }

        let instruction = build_instruction(prompt);
        debug!(instruction_len = instruction.len(), "Requesting ad content");

        let raw = self
            .generator
            .generate_text(&instruction)
            .await
            .map_err(|e| {
                if matches!(
                    e.kind(),
                    AdcraftErrorKind::Provider(_) | AdcraftErrorKind::Generation(_)
                ) {
                    e
                } else {
                    GenerationError::new(GenerationErrorKind::Upstream(e.to_string())).into()
                }
            })?;

        let content = parse_ad_content(&raw)?;
        info!(
            hashtags = content.hashtags().len(),
            style = %content.media_style(),
            "Generated ad content"
        );
        Ok(content)
    }
}
