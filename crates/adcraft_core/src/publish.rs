//! Publish protocol payload and terminal results.

use crate::{AdContent, MediaAsset, MediaKind};
use serde::{Deserialize, Serialize};

/// What the two-phase publish protocol needs: a media URL and a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    /// Publicly reachable media location the platform will fetch.
    pub media_url: String,
    /// Full caption including hashtags.
    pub caption: String,
    /// Whether the media is an image or a video.
    #[serde(default)]
    pub media_kind: MediaKind,
}

impl PublishRequest {
    /// Create an image publish request.
    pub fn new(media_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            caption: caption.into(),
            media_kind: MediaKind::Image,
        }
    }

    /// Set the media kind.
    pub fn with_media_kind(mut self, media_kind: MediaKind) -> Self {
        self.media_kind = media_kind;
        self
    }

    /// Join ad copy with a chosen asset.
    pub fn from_content(content: &AdContent, asset: &MediaAsset) -> Self {
        Self::new(asset.url().clone(), content.full_caption()).with_media_kind(*asset.kind())
    }

    /// Join ad copy with a fallback image URL when no asset was produced.
    pub fn with_fallback(content: &AdContent, fallback_media_url: impl Into<String>) -> Self {
        Self::new(fallback_media_url, content.full_caption())
    }
}

/// Protocol phase in which a publish attempt failed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PublishStage {
    /// Creating the media container (also covers missing credentials)
    ContainerCreation,
    /// Committing the container as a post
    PublishCommit,
    /// Network, timeout or connection failure in either phase
    Transport,
}

/// Terminal outcome of one publish attempt.
///
/// # Examples
///
/// ```
/// use adcraft_core::{PublishResult, PublishStage};
///
/// let ok = PublishResult::success("998877");
/// assert_eq!(ok.post_id(), Some("998877"));
///
/// let failed = PublishResult::failure(PublishStage::PublishCommit, "no id returned", None);
/// assert_eq!(failed.stage(), Some(PublishStage::PublishCommit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PublishResult {
    /// The post is live.
    Success {
        /// Platform post identifier
        post_id: String,
    },
    /// The attempt failed in the given phase.
    Failure {
        /// Failing phase
        stage: PublishStage,
        /// Human-readable reason (provider message where available)
        reason: String,
        /// Provider error code, if the provider sent one
        #[serde(default, skip_serializing_if = "Option::is_none")]
        provider_code: Option<String>,
    },
}

impl PublishResult {
    /// Successful result.
    pub fn success(post_id: impl Into<String>) -> Self {
        Self::Success {
            post_id: post_id.into(),
        }
    }

    /// Failed result.
    pub fn failure(
        stage: PublishStage,
        reason: impl Into<String>,
        provider_code: Option<String>,
    ) -> Self {
        Self::Failure {
            stage,
            reason: reason.into(),
            provider_code,
        }
    }

    /// True when the post was published.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Post id on success.
    pub fn post_id(&self) -> Option<&str> {
        match self {
            Self::Success { post_id } => Some(post_id),
            Self::Failure { .. } => None,
        }
    }

    /// Failing stage on failure.
    pub fn stage(&self) -> Option<PublishStage> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { stage, .. } => Some(*stage),
        }
    }

    /// Failure reason on failure.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason, .. } => Some(reason),
        }
    }

    /// Provider error code on failure, when one was returned.
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { provider_code, .. } => provider_code.as_deref(),
        }
    }
}
