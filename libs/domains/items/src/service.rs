//! Item Service - orchestration between handlers and the repository

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemId, StoredItem};
use crate::repository::ItemRepository;

/// Item service: each operation delegates to exactly one repository call.
///
/// The schema is enforced while the request body is parsed, so no further
/// validation happens here.
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

    #[instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn create_item(&self, item: Item) -> ItemResult<StoredItem> {
        self.repository.create(item).await
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<StoredItem>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ItemResult<StoredItem> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn update_item(&self, id: ItemId, item: Item) -> ItemResult<StoredItem> {
        self.repository.update(id, item).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> ItemResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
