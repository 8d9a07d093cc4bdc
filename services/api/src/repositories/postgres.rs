//! PostgreSQL-backed store
//!
//! Each collection lives in its own table. Tables carry a `seq` column so
//! listing returns documents in the order they were written.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row};
use tracing::info;

use super::Store;
use crate::models::{ShoppingItem, StatusCheck, UserSettings};

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS status_checks (
        seq BIGSERIAL,
        id TEXT PRIMARY KEY,
        client_name TEXT NOT NULL,
        "timestamp" TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shopping_items (
        seq BIGSERIAL,
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        added_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_settings (
        id TEXT PRIMARY KEY,
        preferred_language TEXT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
    "#,
];

/// Store backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new store on top of an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the collection tables if they do not exist yet
    pub async fn migrate(&self) -> DatabaseResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::Migration(e.to_string()))?;
        }

        info!("Collection tables are ready");
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO status_checks (id, client_name, "timestamp")
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&check.id)
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> DatabaseResult<Vec<StatusCheck>> {
        let rows = sqlx::query(
            r#"
            SELECT id, client_name, "timestamp"
            FROM status_checks
            ORDER BY seq
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let checks = rows
            .into_iter()
            .map(|row| {
                Ok(StatusCheck {
                    id: row.try_get("id")?,
                    client_name: row.try_get("client_name")?,
                    timestamp: row.try_get("timestamp")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(checks)
    }

    async fn insert_shopping_item(&self, item: &ShoppingItem) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shopping_items (id, name, added_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.added_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_shopping_items(&self, items: &[ShoppingItem]) -> DatabaseResult<u64> {
        let ids: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
        let names: Vec<String> = items.iter().map(|item| item.name.clone()).collect();
        let added_at: Vec<DateTime<Utc>> = items.iter().map(|item| item.added_at).collect();

        let result = sqlx::query(
            r#"
            INSERT INTO shopping_items (id, name, added_at)
            SELECT t.id, t.name, t.added_at
            FROM UNNEST($1::text[], $2::text[], $3::timestamptz[])
                WITH ORDINALITY AS t(id, name, added_at, ord)
            ORDER BY t.ord
            "#,
        )
        .bind(ids)
        .bind(names)
        .bind(added_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_shopping_items(&self, limit: usize) -> DatabaseResult<Vec<ShoppingItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, added_at
            FROM shopping_items
            ORDER BY seq
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let items = rows
            .into_iter()
            .map(|row| {
                Ok(ShoppingItem {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    added_at: row.try_get("added_at")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(items)
    }

    async fn delete_shopping_item(&self, id: &str) -> DatabaseResult<u64> {
        let result = sqlx::query("DELETE FROM shopping_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_all_shopping_items(&self) -> DatabaseResult<u64> {
        let result = sqlx::query("DELETE FROM shopping_items")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_settings(&self, key: &str) -> DatabaseResult<Option<UserSettings>> {
        let row = sqlx::query(
            r#"
            SELECT preferred_language, updated_at
            FROM user_settings
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        let settings = match row {
            Some(row) => Some(UserSettings {
                preferred_language: row.try_get("preferred_language")?,
                updated_at: row.try_get("updated_at")?,
            }),
            None => None,
        };

        Ok(settings)
    }

    async fn upsert_settings(&self, key: &str, settings: &UserSettings) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_settings (id, preferred_language, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET preferred_language = EXCLUDED.preferred_language,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key)
        .bind(&settings.preferred_language)
        .bind(settings.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::database::{DatabaseConfig, init_pool};
    use serial_test::serial;

    async fn connect() -> PgStore {
        let config = DatabaseConfig::from_env().unwrap();
        let store = PgStore::new(init_pool(&config).await.unwrap());
        store.migrate().await.unwrap();
        store
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    #[serial]
    async fn test_shopping_items_round_trip() {
        let store = connect().await;
        store.delete_all_shopping_items().await.unwrap();

        store
            .insert_shopping_item(&ShoppingItem::new("Milk"))
            .await
            .unwrap();
        let inserted = store
            .insert_shopping_items(&[ShoppingItem::new("Eggs"), ShoppingItem::new("Eggs")])
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        let names: Vec<String> = store
            .list_shopping_items(1000)
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Milk", "Eggs", "Eggs"]);

        assert_eq!(store.delete_all_shopping_items().await.unwrap(), 3);
        store.close().await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    #[serial]
    async fn test_bulk_insert_keeps_input_order() {
        let store = connect().await;
        store.delete_all_shopping_items().await.unwrap();

        let input: Vec<String> = (0..50).map(|i| format!("item-{i}")).collect();
        let items: Vec<ShoppingItem> = input.iter().map(ShoppingItem::new).collect();
        store.insert_shopping_items(&items).await.unwrap();

        let listed = store.list_shopping_items(1000).await.unwrap();
        let names: Vec<String> = listed.iter().map(|item| item.name.clone()).collect();
        assert_eq!(names, input);
        assert_eq!(listed, items);

        store.delete_all_shopping_items().await.unwrap();
        store.close().await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    #[serial]
    async fn test_stored_item_matches_returned_item() {
        let store = connect().await;
        store.delete_all_shopping_items().await.unwrap();

        let item = ShoppingItem::new("Milk");
        store.insert_shopping_item(&item).await.unwrap();

        assert_eq!(store.list_shopping_items(1000).await.unwrap(), vec![item]);

        assert_eq!(store.delete_all_shopping_items().await.unwrap(), 1);
        assert_eq!(store.delete_all_shopping_items().await.unwrap(), 0);
        store.close().await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    #[serial]
    async fn test_settings_upsert() {
        let store = connect().await;
        let settings = UserSettings {
            preferred_language: "Spanish".to_string(),
            updated_at: Utc::now(),
        };

        store.upsert_settings("test", &settings).await.unwrap();
        store.upsert_settings("test", &settings).await.unwrap();

        let found = store.find_settings("test").await.unwrap().unwrap();
        assert_eq!(found.preferred_language, "Spanish");
        store.close().await;
    }
}
