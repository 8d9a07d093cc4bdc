//! In-memory store used for local development and tests

use async_trait::async_trait;
use common::error::DatabaseResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::Store;
use crate::models::{ShoppingItem, StatusCheck, UserSettings};

#[derive(Debug, Default)]
struct Collections {
    status_checks: Vec<StatusCheck>,
    shopping_items: Vec<ShoppingItem>,
    user_settings: HashMap<String, UserSettings>,
}

/// Store keeping every collection in process memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> DatabaseResult<()> {
        self.collections
            .write()
            .await
            .status_checks
            .push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> DatabaseResult<Vec<StatusCheck>> {
        let collections = self.collections.read().await;
        Ok(collections
            .status_checks
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert_shopping_item(&self, item: &ShoppingItem) -> DatabaseResult<()> {
        self.collections
            .write()
            .await
            .shopping_items
            .push(item.clone());
        Ok(())
    }

    async fn insert_shopping_items(&self, items: &[ShoppingItem]) -> DatabaseResult<u64> {
        self.collections
            .write()
            .await
            .shopping_items
            .extend_from_slice(items);
        Ok(items.len() as u64)
    }

    async fn list_shopping_items(&self, limit: usize) -> DatabaseResult<Vec<ShoppingItem>> {
        let collections = self.collections.read().await;
        Ok(collections
            .shopping_items
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete_shopping_item(&self, id: &str) -> DatabaseResult<u64> {
        let mut collections = self.collections.write().await;
        match collections.shopping_items.iter().position(|item| item.id == id) {
            Some(index) => {
                collections.shopping_items.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_all_shopping_items(&self) -> DatabaseResult<u64> {
        let mut collections = self.collections.write().await;
        let removed = collections.shopping_items.len() as u64;
        collections.shopping_items.clear();
        Ok(removed)
    }

    async fn find_settings(&self, key: &str) -> DatabaseResult<Option<UserSettings>> {
        Ok(self.collections.read().await.user_settings.get(key).cloned())
    }

    async fn upsert_settings(&self, key: &str, settings: &UserSettings) -> DatabaseResult<()> {
        self.collections
            .write()
            .await
            .user_settings
            .insert(key.to_string(), settings.clone());
        Ok(())
    }

    async fn close(&self) {}
}
