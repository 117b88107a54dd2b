use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemId, StoredItem};

/// Repository trait for Item storage
///
/// The repository is the only owner of item records and of the identifier
/// counter. Missing ids are reported as [`ItemError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Assign the next id and store the item
    async fn create(&self, item: Item) -> ItemResult<StoredItem>;

    /// Snapshot of all items in ascending id order
    async fn list(&self) -> ItemResult<Vec<StoredItem>>;

    /// Get an item by ID
    async fn get(&self, id: ItemId) -> ItemResult<StoredItem>;

    /// Replace every field of an existing item; the id is kept
    async fn update(&self, id: ItemId, item: Item) -> ItemResult<StoredItem>;

    /// Remove an item permanently
    async fn delete(&self, id: ItemId) -> ItemResult<()>;
}

/// Records and the id counter, guarded together by one lock.
#[derive(Debug, Default)]
struct ItemTable {
    records: BTreeMap<ItemId, Item>,
    last_id: ItemId,
}

/// In-memory implementation of ItemRepository
///
/// Contents live as long as the process. Clones share the same table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    table: Arc<RwLock<ItemTable>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: Item) -> ItemResult<StoredItem> {
        let mut table = self.table.write().await;

        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| ItemError::Internal("item id space exhausted".to_string()))?;
        table.last_id = id;
        table.records.insert(id, item.clone());

        tracing::info!(item_id = id, item = ?item, "Item created");
        Ok(StoredItem::new(id, item))
    }

    async fn list(&self) -> ItemResult<Vec<StoredItem>> {
        let table = self.table.read().await;

        let items: Vec<StoredItem> = table
            .records
            .iter()
            .map(|(id, item)| StoredItem::new(*id, item.clone()))
            .collect();

        tracing::info!(total_items = items.len(), "Listing all items");
        Ok(items)
    }

    async fn get(&self, id: ItemId) -> ItemResult<StoredItem> {
        let table = self.table.read().await;

        match table.records.get(&id) {
            Some(item) => {
                tracing::info!(item_id = id, "Item retrieved");
                Ok(StoredItem::new(id, item.clone()))
            }
            None => {
                tracing::warn!(item_id = id, "Item not found");
                Err(ItemError::NotFound(id))
            }
        }
    }

    async fn update(&self, id: ItemId, item: Item) -> ItemResult<StoredItem> {
        let mut table = self.table.write().await;

        let Some(stored) = table.records.get_mut(&id) else {
            tracing::warn!(item_id = id, "Item not found for update");
            return Err(ItemError::NotFound(id));
        };
        *stored = item.clone();

        tracing::info!(item_id = id, item = ?item, "Item updated");
        Ok(StoredItem::new(id, item))
    }

    async fn delete(&self, id: ItemId) -> ItemResult<()> {
        let mut table = self.table.write().await;

        if table.records.remove(&id).is_some() {
            tracing::info!(item_id = id, "Item deleted");
            Ok(())
        } else {
            tracing::warn!(item_id = id, "Item not found for deletion");
            Err(ItemError::NotFound(id))
        }
    }
}
