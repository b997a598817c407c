//! In-memory storage engine.
//!
//! Items live in a `BTreeMap` keyed by a monotonically increasing insertion
//! sequence, with a `HashMap` from item id to sequence for point access.
//! Walking the tree forwards yields insertion order, backwards yields newest
//! first. Updates rewrite the value under the existing sequence, so position
//! is kept.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Attempts at drawing an unused key before giving up on an insert
const MAX_KEY_ATTEMPTS: usize = 8;

#[derive(Debug, Default)]
struct Store {
    next_seq: u64,
    positions: HashMap<String, u64>,
    entries: BTreeMap<u64, Item>,
}

impl Store {
    /// Draw a UUID v4 not held by a live item, or `None` after
    /// `MAX_KEY_ATTEMPTS` collisions.
    fn fresh_key(&self) -> Option<String> {
        (0..MAX_KEY_ATTEMPTS)
            .map(|_| Uuid::new_v4().to_string())
            .find(|candidate| !self.positions.contains_key(candidate))
    }

    /// Store `value` under a fresh key and return the key.
    fn insert(&mut self, value: String) -> Option<String> {
        let id = self.fresh_key()?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.positions.insert(id.clone(), seq);
        self.entries.insert(
            seq,
            Item {
                id: id.clone(),
                value,
            },
        );
        Some(id)
    }

    fn seq_of(&self, key: &str) -> StorageResult<u64> {
        self.positions
            .get(key)
            .copied()
            .ok_or_else(|| StorageError::ItemNotFound(key.to_string()))
    }
}

/// In-memory implementation of [`ItemRepository`].
///
/// Cloning is cheap and shares the underlying collection. All state sits
/// behind one `RwLock`, and every operation takes it exactly once. Both
/// indexes only change together under the write lock, so reads cannot fail;
/// `FailedToList` and `FailedToCount` are left to backends that can fault.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `values`, in order.
    pub fn with_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Store::default();
        for value in values {
            if store.insert(value.into()).is_none() {
                tracing::error!(
                    "No free key after {} attempts, seed value skipped",
                    MAX_KEY_ATTEMPTS
                );
            }
        }

        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_by_id(&self, key: &str) -> StorageResult<Item> {
        let store = self.store.read().await;
        let seq = store.seq_of(key)?;

        store
            .entries
            .get(&seq)
            .cloned()
            .ok_or_else(|| StorageError::ItemNotFound(key.to_string()))
    }

    async fn add_item(&self, value: String) -> StorageResult<String> {
        let mut store = self.store.write().await;

        let Some(id) = store.insert(value.clone()) else {
            tracing::error!("No free key after {} attempts", MAX_KEY_ATTEMPTS);
            return Err(StorageError::FailedToAdd(value));
        };

        tracing::debug!(item_id = %id, "Added item");
        Ok(id)
    }

    async fn update(&self, key: &str, value: String) -> StorageResult<()> {
        let mut store = self.store.write().await;
        let seq = store.seq_of(key)?;

        let item = store
            .entries
            .get_mut(&seq)
            .ok_or_else(|| StorageError::FailedToUpdate(key.to_string()))?;
        item.value = value;

        tracing::debug!(item_id = %key, "Updated item");
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut store = self.store.write().await;
        let seq = store.seq_of(key)?;

        store.positions.remove(key);
        store
            .entries
            .remove(&seq)
            .ok_or_else(|| StorageError::FailedToDelete(key.to_string()))?;

        tracing::debug!(item_id = %key, "Deleted item");
        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.entries.values().cloned().collect())
    }

    async fn head(&self, n: usize) -> StorageResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.entries.values().take(n).cloned().collect())
    }

    async fn tail(&self, n: usize) -> StorageResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.entries.values().rev().take(n).cloned().collect())
    }

    async fn count(&self) -> StorageResult<usize> {
        let store = self.store.read().await;
        Ok(store.entries.len())
    }
}
