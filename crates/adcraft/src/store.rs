//! In-process record store and a fixed user directory.

use adcraft_core::{AdRecord, CurrentUser};
use adcraft_error::{AdcraftResult, StoreError, StoreErrorKind};
use adcraft_interface::{Store, UserDirectory};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

/// [`Store`] keeping records in memory.
///
/// Writers take the lock exclusively, so at most one write per record is in
/// flight at any time.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<Uuid, AdRecord>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    #[instrument(skip(self, record), fields(id = %record.id()))]
    async fn save(&self, record: AdRecord) -> AdcraftResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(record.id()) {
            return Err(StoreError::new(StoreErrorKind::Duplicate(record.id().to_string())).into());
        }
        debug!("Saving record");
        records.insert(*record.id(), record);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AdcraftResult<Option<AdRecord>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    #[instrument(skip(self, record), fields(id = %record.id()))]
    async fn update(&self, record: AdRecord) -> AdcraftResult<()> {
        let mut records = self.records.write().await;
        match records.get_mut(record.id()) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(StoreError::new(StoreErrorKind::NotFound(record.id().to_string())).into()),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> AdcraftResult<()> {
        match self.records.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::new(StoreErrorKind::NotFound(id.to_string())).into()),
        }
    }

    async fn query_by_owner(&self, owner_id: &str) -> AdcraftResult<Vec<AdRecord>> {
        let mut owned: Vec<AdRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.owner_id() == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }
}

/// [`UserDirectory`] answering with a fixed user, or nobody.
#[derive(Debug, Clone, Default)]
pub struct StaticUserDirectory {
    user: Option<CurrentUser>,
}

impl StaticUserDirectory {
    /// Directory where `user` is always signed in.
    pub fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    /// Directory where nobody is signed in.
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn current_user(&self) -> AdcraftResult<Option<CurrentUser>> {
        Ok(self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcraft_core::{AdContentBuilder, PublishResult, PublishStage};

    fn record(owner: &str) -> AdRecord {
        let content = AdContentBuilder::default()
            .caption("Sip in style")
            .hashtags(vec!["#mugs".to_string()])
            .media_description("a blue mug")
            .build()
            .unwrap();
        AdRecord::new(owner, "promote a mug", content, vec![], None)
    }

    #[tokio::test]
    async fn test_save_get_update_delete() {
        let store = InMemoryStore::new();
        let rec = record("u1");
        let id = *rec.id();

        store.save(rec.clone()).await.unwrap();
        assert!(store.save(rec.clone()).await.is_err());
        assert_eq!(store.get(id).await.unwrap().as_ref(), Some(&rec));

        let updated = rec.with_result(PublishResult::failure(
            PublishStage::Transport,
            "timed out",
            None,
        ));
        store.update(updated.clone()).await.unwrap();
        assert_eq!(store.get(id).await.unwrap(), Some(updated));

        store.delete(id).await.unwrap();
        assert!(store.is_empty().await);
        assert!(store.delete(id).await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.update(record("u1")).await.unwrap_err();
        assert_eq!(err.category(), adcraft_error::ErrorCategory::Storage);
    }

    #[tokio::test]
    async fn test_query_by_owner_newest_first() {
        let store = InMemoryStore::new();
        let first = record("u1");
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = record("u1");
        store.save(first.clone()).await.unwrap();
        store.save(second.clone()).await.unwrap();
        store.save(record("u2")).await.unwrap();

        let owned = store.query_by_owner("u1").await.unwrap();

        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].id(), second.id());
        assert_eq!(owned[1].id(), first.id());
    }
}
