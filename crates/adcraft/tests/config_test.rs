//! Tests for layered configuration loading.

use adcraft::{AdPipeline, AdcraftConfig, ErrorCategory, MediaProviderKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_file_overrides_bundled_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[llm]
model = "gemini-2.5-pro"
temperature = 0.4

[media]
provider = "remote"
base_url = "http://localhost:9000"

[platform]
account_id = "1784"
access_token = "tok"
"#,
    )?;

    let config = AdcraftConfig::from_file(file.path())?;

    assert_eq!(config.llm.model, "gemini-2.5-pro");
    assert_eq!(config.llm.temperature, Some(0.4));
    assert_eq!(config.llm.timeout_secs, 30);
    assert_eq!(config.media.provider, MediaProviderKind::Remote);
    assert_eq!(config.media.base_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(config.media.timeout_secs, 120);

    let credentials = config.platform.credentials();
    assert!(credentials.is_complete());
    assert_eq!(credentials.account_id(), Some("1784"));
    assert_eq!(
        config.platform.endpoint().container_url("1784"),
        "https://graph.facebook.com/v18.0/1784/media"
    );
    Ok(())
}

#[test]
fn test_unknown_media_provider_rejected() -> anyhow::Result<()> {
    let file = write_config("[media]\nprovider = \"dalle\"\n")?;

    let err = AdcraftConfig::from_file(file.path()).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    Ok(())
}

#[test]
fn test_remote_provider_requires_base_url() -> anyhow::Result<()> {
    let file = write_config("[media]\nprovider = \"remote\"\n")?;
    let config = AdcraftConfig::from_file(file.path())?;

    let err = match AdPipeline::from_config(&config) {
        Ok(_) => panic!("expected configuration error"),
        Err(e) => e,
    };

    assert_eq!(err.category(), ErrorCategory::Configuration);
    Ok(())
}

#[test]
fn test_default_pipeline_builds_without_secrets() -> anyhow::Result<()> {
    let config = AdcraftConfig::default();
    assert!(!config.platform.credentials().is_complete());
    AdPipeline::from_config(&config)?;
    Ok(())
}
