//! Pipeline coordinator: generate, optionally synthesize, publish.

use crate::{AdcraftConfig, MediaProviderKind};
use adcraft_content::ContentGenerationEngine;
use adcraft_core::{
    AdContent, AdRecord, MediaAsset, MediaGenerationOptions, MediaKind, PlatformCredentials,
    PublishRequest, PublishResult,
};
use adcraft_error::{AdcraftResult, ConfigError};
use adcraft_interface::{Store, SynthesisProvider, UserDirectory};
use adcraft_media::{MediaSynthesisService, RemoteSynthesisProvider, StockLibraryProvider};
use adcraft_models::{GeminiClient, HttpProviderClient};
use adcraft_publish::PublishOrchestrator;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Image published when no asset was synthesized and none is configured.
pub const DEFAULT_FALLBACK_MEDIA_URL: &str =
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=1080";

/// One end-to-end invocation.
#[derive(Debug, Clone, Default)]
pub struct PipelineRequest {
    /// Free-text description of the ad
    pub prompt: String,
    /// Media to synthesize; `None` publishes the fallback image
    pub media_options: Option<MediaGenerationOptions>,
    /// Platform credentials for the publish step
    pub credentials: PlatformCredentials,
}

/// Generated content and media, ready for preview before publishing.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AdDraft {
    /// Prompt the draft was generated from
    prompt: String,
    /// Structured ad copy
    content: AdContent,
    /// Synthesized assets, possibly empty
    assets: Vec<MediaAsset>,
}

/// Everything a pipeline invocation produced.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct PipelineOutcome {
    /// Structured ad copy
    content: AdContent,
    /// Synthesized assets, possibly empty
    assets: Vec<MediaAsset>,
    /// Terminal publish result
    result: PublishResult,
    /// Audit record id, when one was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    record_id: Option<Uuid>,
}

/// Sequences content generation, media synthesis and publishing.
///
/// Holds no state between invocations; independent calls may run
/// concurrently.
#[derive(Clone)]
pub struct AdPipeline {
    engine: ContentGenerationEngine,
    media: MediaSynthesisService,
    publisher: PublishOrchestrator,
    fallback_media_url: String,
    audit: Option<(Arc<dyn Store>, Arc<dyn UserDirectory>)>,
}

impl AdPipeline {
    /// Assemble a pipeline from its three stages.
    pub fn new(
        engine: ContentGenerationEngine,
        media: MediaSynthesisService,
        publisher: PublishOrchestrator,
    ) -> Self {
        Self {
            engine,
            media,
            publisher,
            fallback_media_url: DEFAULT_FALLBACK_MEDIA_URL.to_string(),
            audit: None,
        }
    }

    /// Publish this image when a draft has no assets.
    pub fn with_fallback_media_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_media_url = url.into();
        self
    }

    /// Save an audit record for every publish attempt by a signed-in user.
    pub fn with_audit(mut self, store: Arc<dyn Store>, users: Arc<dyn UserDirectory>) -> Self {
        self.audit = Some((store, users));
        self
    }

    /// The publish stage, for publishing without generating.
    pub fn publisher(&self) -> &PublishOrchestrator {
        &self.publisher
    }

    /// Wire real providers from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an HTTP client cannot be built or the remote media
    /// provider is selected without a `media.base_url`.
    #[instrument(skip(config), fields(media_provider = %config.media.provider))]
    pub fn from_config(config: &AdcraftConfig) -> AdcraftResult<Self> {
        let llm_http = Arc::new(HttpProviderClient::new(config.llm.timeout())?);
        let generator = GeminiClient::new(
            llm_http,
            config.llm.api_key.as_ref().map(|k| k.expose().to_string()),
            config.llm.model.clone(),
        )
        .with_base_url(config.llm.base_url.clone())
        .with_temperature(config.llm.temperature);
        let engine = ContentGenerationEngine::new(Arc::new(generator));

        let provider: Arc<dyn SynthesisProvider> = match config.media.provider {
            MediaProviderKind::Stock => Arc::new(
                StockLibraryProvider::default().with_latency(config.media.simulated_latency()),
            ),
            MediaProviderKind::Remote => {
                let base_url = config.media.base_url.clone().ok_or_else(|| {
                    ConfigError::new("media.base_url is required for the remote provider")
                })?;
                let http = Arc::new(HttpProviderClient::new(config.media.timeout())?);
                Arc::new(RemoteSynthesisProvider::new(
                    http,
                    base_url,
                    config.media.api_key.as_ref().map(|k| k.expose().to_string()),
                ))
            }
        };
        let media = MediaSynthesisService::new(provider);

        let platform_http = Arc::new(HttpProviderClient::new(config.platform.timeout())?);
        let publisher = PublishOrchestrator::new(platform_http, config.platform.endpoint());

        let mut pipeline = Self::new(engine, media, publisher);
        if let Some(url) = &config.platform.fallback_media_url {
            pipeline = pipeline.with_fallback_media_url(url.clone());
        }
        debug!("Pipeline assembled from configuration");
        Ok(pipeline)
    }

    /// Generate content and, when requested, media for `prompt`.
    ///
    /// # Errors
    ///
    /// Surfaces content generation and synthesis errors unchanged.
    #[instrument(skip(self, prompt, media_options), fields(with_media = media_options.is_some()))]
    pub async fn draft(
        &self,
        prompt: &str,
        media_options: Option<&MediaGenerationOptions>,
    ) -> AdcraftResult<AdDraft> {
        let content = self.engine.generate(prompt).await?;

        let assets = match media_options {
            Some(options) => self.media.synthesize(&content, options).await?,
            None => Vec::new(),
        };

        Ok(AdDraft {
            prompt: prompt.to_string(),
            content,
            assets,
        })
    }

    /// Publish request for a draft.
    ///
    /// Prefers the image asset, then the video, then the fallback image.
    pub fn publish_request(&self, draft: &AdDraft) -> PublishRequest {
        let chosen = draft
            .assets
            .iter()
            .find(|a| a.is_image())
            .or_else(|| draft.assets.iter().find(|a| *a.kind() == MediaKind::Video));

        match chosen {
            Some(asset) => PublishRequest::from_content(&draft.content, asset),
            None => {
                debug!(url = %self.fallback_media_url, "No asset to publish, using fallback");
                PublishRequest::with_fallback(&draft.content, self.fallback_media_url.clone())
            }
        }
    }

    /// Publish a draft and record the attempt.
    ///
    /// The publish result is returned even if the audit record cannot be
    /// saved.
    #[instrument(skip(self, draft, credentials))]
    pub async fn publish_draft(
        &self,
        draft: AdDraft,
        credentials: &PlatformCredentials,
    ) -> PipelineOutcome {
        let request = self.publish_request(&draft);
        let result = self.publisher.publish(&request, credentials).await;

        let record_id = self.record(&draft, &result).await;

        match &result {
            PublishResult::Success { post_id } => info!(post_id = %post_id, "Ad published"),
            PublishResult::Failure { stage, reason, .. } => {
                warn!(stage = %stage, reason = %reason, "Ad not published")
            }
        }

        PipelineOutcome {
            content: draft.content,
            assets: draft.assets,
            result,
            record_id,
        }
    }

    /// Run one end-to-end invocation.
    ///
    /// # Errors
    ///
    /// Returns error when content generation or media synthesis fails.
    /// Publish failures are reported in the outcome's result instead.
    #[instrument(skip(self, request))]
    pub async fn run(&self, request: PipelineRequest) -> AdcraftResult<PipelineOutcome> {
        let draft = self
            .draft(&request.prompt, request.media_options.as_ref())
            .await?;
        Ok(self.publish_draft(draft, &request.credentials).await)
    }

    /// Load the audit record saved for `outcome`, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the store lookup fails.
    pub async fn audit_record(
        &self,
        outcome: &PipelineOutcome,
    ) -> AdcraftResult<Option<AdRecord>> {
        match (&self.audit, outcome.record_id) {
            (Some((store, _)), Some(id)) => store.get(id).await,
            _ => Ok(None),
        }
    }

    async fn record(&self, draft: &AdDraft, result: &PublishResult) -> Option<Uuid> {
        let (store, users) = self.audit.as_ref()?;

        let user = match users.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("No signed-in user, skipping audit record");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Could not resolve current user");
                return None;
            }
        };

        let record = AdRecord::new(
            user.id,
            draft.prompt.clone(),
            draft.content.clone(),
            draft.assets.clone(),
            Some(result.clone()),
        );
        let id = *record.id();

        match store.save(record).await {
            Ok(()) => Some(id),
            Err(e) => {
                warn!(error = %e, "Could not save audit record");
                None
            }
        }
    }
}
