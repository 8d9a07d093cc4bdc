//! Shopping list management

use common::error::DatabaseError;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use super::MAX_LIST_LEN;
use crate::{models::ShoppingItem, repositories::Store};

/// Error type for shopping list operations
#[derive(Debug, Error)]
pub enum ShoppingListError {
    /// No item carries the requested id
    #[error("Shopping item {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Service managing the shopping item collection
#[derive(Clone)]
pub struct ShoppingListService {
    store: Arc<dyn Store>,
}

impl ShoppingListService {
    /// Create a new shopping list service
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// List the shopping items, at most [`MAX_LIST_LEN`] of them
    pub async fn list(&self) -> Result<Vec<ShoppingItem>, ShoppingListError> {
        Ok(self.store.list_shopping_items(MAX_LIST_LEN).await?)
    }

    /// Add a single item
    pub async fn add_one(&self, name: String) -> Result<ShoppingItem, ShoppingListError> {
        let item = ShoppingItem::new(name);
        self.store.insert_shopping_item(&item).await?;
        Ok(item)
    }

    /// Add one item per name, returning how many were added
    pub async fn add_many(&self, names: Vec<String>) -> Result<usize, ShoppingListError> {
        if names.is_empty() {
            return Ok(0);
        }

        let items: Vec<ShoppingItem> = names.into_iter().map(ShoppingItem::new).collect();
        self.store.insert_shopping_items(&items).await?;

        info!("Added {} items to shopping list", items.len());
        Ok(items.len())
    }

    /// Remove the item with the given id
    pub async fn delete_one(&self, id: &str) -> Result<(), ShoppingListError> {
        match self.store.delete_shopping_item(id).await? {
            0 => Err(ShoppingListError::NotFound(id.to_string())),
            _ => Ok(()),
        }
    }

    /// Remove every item, returning how many were removed
    pub async fn clear(&self) -> Result<u64, ShoppingListError> {
        let removed = self.store.delete_all_shopping_items().await?;
        info!("Cleared {} items from shopping list", removed);
        Ok(removed)
    }
}
