//! Persistence and identity collaborators.

use adcraft_core::{AdRecord, CurrentUser};
use adcraft_error::AdcraftResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Key-value style store for generated ad records.
///
/// Implementations must guarantee at most one writer per record.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a new record. Fails if the id already exists.
    async fn save(&self, record: AdRecord) -> AdcraftResult<()>;

    /// Fetch a record by id.
    async fn get(&self, id: Uuid) -> AdcraftResult<Option<AdRecord>>;

    /// Replace an existing record. Fails if the id is unknown.
    async fn update(&self, record: AdRecord) -> AdcraftResult<()>;

    /// Remove a record. Fails if the id is unknown.
    async fn delete(&self, id: Uuid) -> AdcraftResult<()>;

    /// All records owned by `owner_id`, newest first.
    async fn query_by_owner(&self, owner_id: &str) -> AdcraftResult<Vec<AdRecord>>;
}

/// Resolves the user on whose behalf the pipeline runs.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> AdcraftResult<Option<CurrentUser>>;
}
