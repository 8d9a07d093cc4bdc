//! Repositories for the document collections
//!
//! The service talks to its collections through the [`Store`] trait so the
//! PostgreSQL backend can be swapped for the in-memory one in development and
//! tests.

use async_trait::async_trait;
use common::error::DatabaseResult;

use crate::models::{ShoppingItem, StatusCheck, UserSettings};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Access to the status check, shopping item and user settings collections
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist a new status check
    async fn insert_status_check(&self, check: &StatusCheck) -> DatabaseResult<()>;

    /// Fetch up to `limit` status checks in retrieval order
    async fn list_status_checks(&self, limit: usize) -> DatabaseResult<Vec<StatusCheck>>;

    /// Persist a new shopping item
    async fn insert_shopping_item(&self, item: &ShoppingItem) -> DatabaseResult<()>;

    /// Persist several shopping items, returning how many were written
    async fn insert_shopping_items(&self, items: &[ShoppingItem]) -> DatabaseResult<u64>;

    /// Fetch up to `limit` shopping items in retrieval order
    async fn list_shopping_items(&self, limit: usize) -> DatabaseResult<Vec<ShoppingItem>>;

    /// Delete the shopping item with the given id, returning how many were removed
    async fn delete_shopping_item(&self, id: &str) -> DatabaseResult<u64>;

    /// Delete every shopping item, returning how many were removed
    async fn delete_all_shopping_items(&self) -> DatabaseResult<u64>;

    /// Find the settings document stored under `key`
    async fn find_settings(&self, key: &str) -> DatabaseResult<Option<UserSettings>>;

    /// Create or replace the settings document stored under `key`
    async fn upsert_settings(&self, key: &str, settings: &UserSettings) -> DatabaseResult<()>;

    /// Release the underlying connections
    async fn close(&self);
}
