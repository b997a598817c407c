//! Item Service - Business logic layer

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult, StorageError};
use crate::models::{CreatedItem, Item, ItemEntry, ItemValue};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service validates client input, calls the repository and translates
/// every [`StorageError`] into an [`ItemError`]. Storage errors never reach
/// callers.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all items in insertion order
    #[instrument(skip(self))]
    pub async fn list(&self) -> ItemResult<Vec<Item>> {
        tracing::info!("Listing all items");
        self.repository.list().await.map_err(server_error)
    }

    /// Get a single item as a `{id: value}` map
    #[instrument(skip(self))]
    pub async fn get_item_by_id(&self, id: &str) -> ItemResult<ItemEntry> {
        require_id(id, "Item ID must be provided.")?;

        self.repository
            .get_by_id(id)
            .await
            .map(Item::into_entry)
            .map_err(|e| lookup_error(id, e))
    }

    /// Validate `input` as `{value: string}` and store it
    #[instrument(skip(self, input))]
    pub async fn add_item(&self, input: Value) -> ItemResult<CreatedItem> {
        tracing::info!(input = %input, "Adding item");
        let ItemValue { value } = parse_input(input)?;

        let id = self.repository.add_item(value).await.map_err(server_error)?;
        Ok(CreatedItem { id })
    }

    /// Replace the value of an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: &str, input: Value) -> ItemResult<Item> {
        tracing::info!(item_id = %id, input = %input, "Updating item");
        require_id(id, "Item ID must be provided for update.")?;
        let ItemValue { value } = parse_input(input)?;

        self.repository
            .update(id, value.clone())
            .await
            .map_err(|e| lookup_error(id, e))?;

        Ok(Item::new(id, value))
    }

    /// Delete an item permanently
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<()> {
        require_id(id, "Item ID must be provided for deletion.")?;

        self.repository
            .delete(id)
            .await
            .map_err(|e| lookup_error(id, e))
    }

    /// The oldest `n` items, oldest first
    #[instrument(skip(self))]
    pub async fn head(&self, n: i64) -> ItemResult<Vec<Item>> {
        let n = require_positive(n, "head")?;
        self.repository.head(n).await.map_err(server_error)
    }

    /// The newest `n` items, newest first
    #[instrument(skip(self))]
    pub async fn tail(&self, n: i64) -> ItemResult<Vec<Item>> {
        let n = require_positive(n, "tail")?;
        self.repository.tail(n).await.map_err(server_error)
    }

    /// Number of stored items
    #[instrument(skip(self))]
    pub async fn count(&self) -> ItemResult<usize> {
        self.repository.count().await.map_err(server_error)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn require_id(id: &str, message: &str) -> ItemResult<()> {
    if id.is_empty() {
        tracing::warn!("{}", message);
        return Err(ItemError::Validation(message.to_string()));
    }
    Ok(())
}

fn require_positive(n: i64, operation: &str) -> ItemResult<usize> {
    if n <= 0 {
        let message = format!(
            "{}: The number of items to return must be greater than zero.",
            operation
        );
        tracing::warn!("{}", message);
        return Err(ItemError::Validation(message));
    }
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}

fn parse_input(input: Value) -> ItemResult<ItemValue> {
    serde_json::from_value::<ItemValue>(input.clone()).map_err(|_| {
        let message = format!(
            "Invalid input data: expected data in the format: {{'value': 'string'}} but got: {}",
            input
        );
        tracing::warn!("{}", message);
        ItemError::Validation(message)
    })
}

/// `ItemNotFound` means the client asked for a missing key; anything else
/// is a server fault.
fn lookup_error(id: &str, err: StorageError) -> ItemError {
    match err {
        StorageError::ItemNotFound(_) => {
            tracing::info!(item_id = %id, "Item not found");
            ItemError::NotFound(id.to_string())
        }
        other => server_error(other),
    }
}

fn server_error(err: StorageError) -> ItemError {
    let message = format!("Database error occurred: {}", err);
    tracing::error!("{}", message);
    ItemError::Server(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryItemRepository;
    use crate::repository::MockItemRepository;
    use serde_json::json;

    fn seeded() -> ItemService<InMemoryItemRepository> {
        ItemService::new(InMemoryItemRepository::with_values([
            "String1", "String2", "String3",
        ]))
    }

    fn values(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.value.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_returns_items_in_order() {
        let items = seeded().list().await.unwrap();
        assert_eq!(values(&items), ["String1", "String2", "String3"]);
    }

    #[tokio::test]
    async fn test_head_and_tail_scenario() {
        let service = seeded();

        assert_eq!(values(&service.head(2).await.unwrap()), ["String1", "String2"]);
        assert_eq!(values(&service.tail(2).await.unwrap()), ["String3", "String2"]);
    }

    #[tokio::test]
    async fn test_head_and_tail_reject_non_positive() {
        let service = seeded();

        for n in [0, -1] {
            assert!(matches!(
                service.head(n).await,
                Err(ItemError::Validation(_))
            ));
            assert!(matches!(
                service.tail(n).await,
                Err(ItemError::Validation(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_add_then_get_item() {
        let service = seeded();

        let created = service.add_item(json!({"value": "NewItem"})).await.unwrap();
        let entry = service.get_item_by_id(&created.id).await.unwrap();

        assert_eq!(entry.get(&created.id).map(String::as_str), Some("NewItem"));
        assert_eq!(service.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_add_item_rejects_wrong_shape() {
        let service = seeded();

        let err = service
            .add_item(json!({"invalid_field": "x"}))
            .await
            .unwrap_err();

        match err {
            ItemError::Validation(msg) => {
                assert!(msg.contains("{'value': 'string'}"));
                assert!(msg.contains("invalid_field"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(service.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_add_item_rejects_non_string_value() {
        let err = seeded().add_item(json!({"value": 42})).await.unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_item_validation_and_not_found() {
        let service = seeded();

        assert!(matches!(
            service.get_item_by_id("").await,
            Err(ItemError::Validation(_))
        ));
        assert_eq!(
            service.get_item_by_id("missing").await,
            Err(ItemError::NotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_blank_id_is_looked_up_not_rejected() {
        let service = seeded();

        assert_eq!(
            service.get_item_by_id(" ").await,
            Err(ItemError::NotFound(" ".to_string()))
        );
        assert!(matches!(
            service.delete_item(" ").await,
            Err(ItemError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_item_returns_updated_item() {
        let service = seeded();
        let id = service.list().await.unwrap()[0].id.clone();

        let updated = service
            .update_item(&id, json!({"value": "Changed"}))
            .await
            .unwrap();

        assert_eq!(updated, Item::new(id.clone(), "Changed"));
        assert_eq!(
            values(&service.list().await.unwrap()),
            ["Changed", "String2", "String3"]
        );
    }

    #[tokio::test]
    async fn test_update_item_errors() {
        let service = seeded();

        assert!(matches!(
            service.update_item("", json!({"value": "x"})).await,
            Err(ItemError::Validation(_))
        ));
        assert!(matches!(
            service.update_item("missing", json!({"value": "x"})).await,
            Err(ItemError::NotFound(_))
        ));
        assert!(matches!(
            service.update_item("missing", json!({"nope": "x"})).await,
            Err(ItemError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let service = seeded();
        let id = service.list().await.unwrap()[1].id.clone();

        service.delete_item(&id).await.unwrap();

        assert_eq!(service.count().await.unwrap(), 2);
        assert_eq!(
            service.delete_item(&id).await,
            Err(ItemError::NotFound(id.clone()))
        );
        assert!(matches!(
            service.delete_item("").await,
            Err(ItemError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_failure_becomes_server_error() {
        let mut mock = MockItemRepository::new();
        mock.expect_list()
            .times(1)
            .returning(|| Err(StorageError::FailedToList("disk on fire".to_string())));

        let err = ItemService::new(mock).list().await.unwrap_err();

        match err {
            ItemError::Server(msg) => assert!(msg.starts_with("Database error occurred")),
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_fault_is_not_reported_as_not_found() {
        let mut mock = MockItemRepository::new();
        mock.expect_get_by_id()
            .times(1)
            .returning(|key| Err(StorageError::FailedToList(key.to_string())));

        let err = ItemService::new(mock).get_item_by_id("abc").await.unwrap_err();
        assert!(matches!(err, ItemError::Server(_)));
    }

    #[tokio::test]
    async fn test_add_fault_becomes_server_error() {
        let mut mock = MockItemRepository::new();
        mock.expect_add_item()
            .times(1)
            .returning(|value| Err(StorageError::FailedToAdd(value)));

        let err = ItemService::new(mock)
            .add_item(json!({"value": "x"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::Server(_)));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let mut mock = MockItemRepository::new();
        mock.expect_add_item().never();
        mock.expect_head().never();

        let service = ItemService::new(mock);

        assert!(service.add_item(json!("just a string")).await.is_err());
        assert!(service.head(0).await.is_err());
    }

    #[tokio::test]
    async fn test_count_fault_becomes_server_error() {
        let mut mock = MockItemRepository::new();
        mock.expect_count()
            .returning(|| Err(StorageError::FailedToCount("index mismatch".to_string())));

        let err = ItemService::new(mock).count().await.unwrap_err();
        assert!(matches!(err, ItemError::Server(_)));
    }
}
