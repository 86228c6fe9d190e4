//! Instructional template sent to the language model.

use adcraft_core::MediaStyle;
use strum::IntoEnumIterator;

/// Wrap a user's ad request in the fixed instructional template.
///
/// The model is asked to infer category, tone and platform on its own and to
/// answer with a single JSON object shaped like `AdContent` (plus a `platform`
/// field that is discarded).
pub fn build_instruction(user_prompt: &str) -> String {
    let styles = MediaStyle::iter()
        .map(|style| style.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are an expert social media marketer writing Instagram advertisements.

Analyze the advertisement request below. Infer the product category, the most
effective tone of voice, and optimize the copy for the target platform.

Advertisement request:
"""
{prompt}
"""

Respond with ONLY a single JSON object, no markdown and no commentary, with exactly these fields:
{{
  "caption": "engaging post caption without hashtags",
  "hashtags": ["relevant", "hashtags", "most", "relevant", "first"],
  "mediaDescription": "detailed description of the ideal image or video for this ad",
  "mediaStyle": "one of: {styles}",
  "tone": "tone of voice used",
  "productCategory": "inferred product category",
  "platform": "platform the copy is optimized for"
}}"#,
        prompt = user_prompt.trim(),
        styles = styles,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_embeds_prompt_and_styles() {
        let instruction = build_instruction("  promote a blue ceramic mug ");
        assert!(instruction.contains("\npromote a blue ceramic mug\n"));
        assert!(instruction.contains("modern, minimalist, vibrant, professional, luxury, fun, aesthetic"));
        assert!(instruction.contains("\"mediaDescription\""));
    }
}
