use async_trait::async_trait;

use crate::error::StorageResult;
use crate::models::Item;

/// Storage contract for items.
///
/// Keys are generated by the implementation. Iteration order (`list`, `head`,
/// `tail`) is insertion order and survives updates. Implementations must
/// serialize access so that concurrent callers never observe a torn state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch one item; `ItemNotFound` if the key is absent
    async fn get_by_id(&self, key: &str) -> StorageResult<Item>;

    /// Store a value under a freshly generated key and return the key
    async fn add_item(&self, value: String) -> StorageResult<String>;

    /// Overwrite the value of an existing key in place
    async fn update(&self, key: &str, value: String) -> StorageResult<()>;

    /// Remove an existing key permanently
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// All live items in insertion order
    async fn list(&self) -> StorageResult<Vec<Item>>;

    /// The first `min(n, count)` items in insertion order
    async fn head(&self, n: usize) -> StorageResult<Vec<Item>>;

    /// The first `min(n, count)` items in reverse insertion order (newest first)
    async fn tail(&self, n: usize) -> StorageResult<Vec<Item>>;

    /// Number of live items
    async fn count(&self) -> StorageResult<usize>;
}
