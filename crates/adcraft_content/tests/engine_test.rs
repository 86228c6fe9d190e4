//! Tests for ContentGenerationEngine with a mock text generator.

use adcraft_content::{ContentGenerationEngine, parse_ad_content};
use adcraft_core::MediaStyle;
use adcraft_error::{
    AdcraftErrorKind, AdcraftResult, ErrorCategory, GenerationErrorKind, ProviderError,
    ProviderErrorKind,
};
use adcraft_interface::TextGenerator;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Behaviour of the mock generator.
enum MockBehavior {
    Reply(String),
    Timeout,
}

/// Mock generator counting calls.
struct MockTextGenerator {
    behavior: MockBehavior,
    configured: bool,
    calls: AtomicUsize,
}

impl MockTextGenerator {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: MockBehavior::Reply(text.to_string()),
            configured: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            behavior: MockBehavior::Reply(String::new()),
            configured: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn timing_out() -> Arc<Self> {
        Arc::new(Self {
            behavior: MockBehavior::Timeout,
            configured: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_text(&self, _prompt: &str) -> AdcraftResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Timeout => Err(ProviderError::new(ProviderErrorKind::Timeout).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

fn generation_kind(err: &adcraft_error::AdcraftError) -> GenerationErrorKind {
    match err.kind() {
        AdcraftErrorKind::Generation(e) => e.kind.clone(),
        other => panic!("expected generation error, got {}", other),
    }
}

#[tokio::test]
async fn test_blue_mug_scenario() -> anyhow::Result<()> {
    let mock = MockTextGenerator::replying(
        r#"{"caption":"Sip in style ☕","hashtags":["mugs","ceramic"],"mediaDescription":"a blue mug on a wood table"}"#,
    );
    let engine = ContentGenerationEngine::new(mock.clone());

    let content = engine.generate("promote a blue ceramic mug").await?;

    assert_eq!(content.caption(), "Sip in style ☕");
    assert_eq!(
        content.hashtags(),
        &vec!["#mugs".to_string(), "#ceramic".to_string()]
    );
    assert_eq!(content.media_description(), "a blue mug on a wood table");
    assert_eq!(content.media_style(), &MediaStyle::Modern);
    assert_eq!(content.tone(), &None);
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_json_wrapped_in_prose() -> anyhow::Result<()> {
    let mock = MockTextGenerator::replying(
        "Absolutely! Here is your ad:\n```json\n{\"caption\": \"Glow up\", \"hashtags\": [\"#skincare\", \"serum\"], \"mediaDescription\": \"serum bottle in sunlight\", \"mediaStyle\": \"Luxury\", \"tone\": \"warm\", \"productCategory\": \"beauty\", \"platform\": \"instagram\"}\n```\nLet me know if you want changes.",
    );
    let engine = ContentGenerationEngine::new(mock);

    let content = engine.generate("serum launch").await?;

    assert_eq!(content.hashtags(), &vec!["#skincare".to_string(), "#serum".to_string()]);
    assert_eq!(content.media_style(), &MediaStyle::Luxury);
    assert_eq!(content.tone().as_deref(), Some("warm"));
    assert_eq!(content.product_category().as_deref(), Some("beauty"));
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_provider_is_not_called() {
    let mock = MockTextGenerator::unconfigured();
    let engine = ContentGenerationEngine::new(mock.clone());

    let err = engine.generate("promote a mug").await.unwrap_err();

    assert_eq!(generation_kind(&err), GenerationErrorKind::UninitializedProvider);
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_empty_prompt_rejected() {
    let mock = MockTextGenerator::replying("{}");
    let engine = ContentGenerationEngine::new(mock.clone());

    let err = engine.generate("   ").await.unwrap_err();
    assert_eq!(generation_kind(&err), GenerationErrorKind::EmptyPrompt);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_provider_failure_surfaces() {
    let engine = ContentGenerationEngine::new(MockTextGenerator::timing_out());

    let err = engine.generate("promote a mug").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Transport);
}

#[tokio::test]
async fn test_transport_error_passes_through_as_provider_error() {
    let engine = ContentGenerationEngine::new(MockTextGenerator::timing_out());

    let err = engine.generate("promote a mug").await.unwrap_err();
    match err.kind() {
        AdcraftErrorKind::Provider(e) => {
            assert_eq!(e.kind, ProviderErrorKind::Timeout);
            assert!(e.is_transport());
        }
        other => panic!("expected provider error, got {}", other),
    }
    assert_eq!(err.category(), ErrorCategory::Transport);
}

#[tokio::test]
async fn test_missing_required_fields_rejected() {
    let replies = [
        r#"{"hashtags":["a"],"mediaDescription":"d"}"#,
        r#"{"caption":"c","mediaDescription":"d"}"#,
        r#"{"caption":"c","hashtags":["a"]}"#,
        r#"{"caption":"  ","hashtags":["a"],"mediaDescription":"d"}"#,
        r#"{"caption":"c","hashtags":[],"mediaDescription":"d"}"#,
        r##"{"caption":"c","hashtags":[" ", "#"],"mediaDescription":"d"}"##,
        "I cannot help with that.",
        r#"{"caption": "unterminated"#,
        r#"{"caption": 42, "hashtags": ["a"], "mediaDescription": "d"}"#,
    ];

    for reply in replies {
        let engine = ContentGenerationEngine::new(MockTextGenerator::replying(reply));
        let err = engine.generate("promote a mug").await.unwrap_err();
        assert!(
            matches!(generation_kind(&err), GenerationErrorKind::MalformedResponse(_)),
            "reply {:?} produced {}",
            reply,
            err
        );
        assert_eq!(err.category(), ErrorCategory::MalformedResponse);
    }
}

#[test]
fn test_unknown_style_defaults_to_modern() {
    let content = parse_ad_content(
        r##"{"caption":"c","hashtags":"#one two, three","mediaDescription":"d","mediaStyle":"retro"}"##,
    )
    .expect("Valid content");

    assert_eq!(content.media_style(), &MediaStyle::Modern);
    assert_eq!(
        content.hashtags(),
        &vec!["#one".to_string(), "#two".to_string(), "#three".to_string()]
    );
}

#[test]
fn test_duplicate_hashtags_kept_in_order() {
    let content = parse_ad_content(
        r##"{"caption":"c","hashtags":["sale","#sale","new"],"mediaDescription":"d"}"##,
    )
    .expect("Valid content");

    assert_eq!(
        content.hashtags(),
        &vec!["#sale".to_string(), "#sale".to_string(), "#new".to_string()]
    );
}
