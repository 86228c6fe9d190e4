//! Audit record of one pipeline invocation.

use crate::{AdContent, MediaAsset, PublishResult};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generated ad and its publish outcome, as handed to the store.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AdRecord {
    /// Record identifier.
    id: Uuid,
    /// Owning user id.
    owner_id: String,
    /// Prompt the ad was generated from.
    prompt: String,
    /// Generated copy.
    content: AdContent,
    /// Synthesized media, possibly empty.
    assets: Vec<MediaAsset>,
    /// Publish outcome, `None` for unpublished drafts.
    result: Option<PublishResult>,
    /// Creation time.
    created_at: DateTime<Utc>,
}

impl AdRecord {
    /// Create a record with a fresh id and the current time.
    pub fn new(
        owner_id: impl Into<String>,
        prompt: impl Into<String>,
        content: AdContent,
        assets: Vec<MediaAsset>,
        result: Option<PublishResult>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            prompt: prompt.into(),
            content,
            assets,
            result,
            created_at: Utc::now(),
        }
    }

    /// Attach a publish outcome, returning the updated record.
    pub fn with_result(mut self, result: PublishResult) -> Self {
        self.result = Some(result);
        self
    }
}
