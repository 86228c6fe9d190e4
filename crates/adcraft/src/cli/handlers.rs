//! Command handlers.

use super::commands::{Commands, MediaArgs};
use adcraft::{
    AdPipeline, AdcraftConfig, CurrentUser, InMemoryStore, MediaKind, PipelineRequest,
    PublishRequest, PublishResult, StaticUserDirectory,
};
use serde::Serialize;
use std::sync::Arc;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Dispatch a parsed command.
pub async fn handle_command(command: Commands, config: AdcraftConfig) -> CliResult {
    let pipeline = AdPipeline::from_config(&config)?;

    match command {
        Commands::Generate { prompt } => {
            let draft = pipeline.draft(&prompt, None).await?;
            print_json(draft.content())
        }

        Commands::Media { prompt, media } => {
            let options = media.to_options()?;
            let draft = pipeline.draft(&prompt, Some(&options)).await?;
            print_json(&draft)
        }

        Commands::Publish {
            media_url,
            caption,
            video,
        } => {
            let kind = if video { MediaKind::Video } else { MediaKind::Image };
            let request = PublishRequest::new(media_url, caption).with_media_kind(kind);
            let result = pipeline
                .publisher()
                .publish(&request, &config.platform.credentials())
                .await;
            print_json(&result)?;
            check(&result)
        }

        Commands::Run {
            prompt,
            no_media,
            media,
            dry_run,
            owner,
        } => run(pipeline, &config, prompt, no_media, media, dry_run, owner).await,
    }
}

async fn run(
    mut pipeline: AdPipeline,
    config: &AdcraftConfig,
    prompt: String,
    no_media: bool,
    media: MediaArgs,
    dry_run: bool,
    owner: Option<String>,
) -> CliResult {
    let media_options = if no_media {
        None
    } else {
        Some(media.to_options()?)
    };

    if dry_run {
        let draft = pipeline.draft(&prompt, media_options.as_ref()).await?;
        print_json(&draft)?;
        return print_json(&pipeline.publish_request(&draft));
    }

    if let Some(owner) = owner {
        pipeline = pipeline.with_audit(
            Arc::new(InMemoryStore::new()),
            Arc::new(StaticUserDirectory::signed_in(CurrentUser::new(owner))),
        );
    }

    let outcome = pipeline
        .run(PipelineRequest {
            prompt,
            media_options,
            credentials: config.platform.credentials(),
        })
        .await?;
    print_json(&outcome)?;
    if let Some(record) = pipeline.audit_record(&outcome).await? {
        print_json(&record)?;
    }
    check(outcome.result())
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn check(result: &PublishResult) -> CliResult {
    match result {
        PublishResult::Success { .. } => Ok(()),
        PublishResult::Failure { stage, reason, .. } => {
            Err(format!("publish failed during {}: {}", stage, reason).into())
        }
    }
}
