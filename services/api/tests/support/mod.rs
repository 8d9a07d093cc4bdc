//! Shared helpers for the router tests

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::error::DatabaseResult;
use recipe_api::{
    AppState, create_router,
    gemini::{GenerationError, GenerativeClient},
    models::{ShoppingItem, StatusCheck, UserSettings},
    repositories::{MemoryStore, Store},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Generative client replaying a fixed answer and recording prompts
pub struct ScriptedClient {
    answer: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    /// Client answering every prompt with `answer`
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Client whose upstream always fails with a 500
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer.clone().ok_or(GenerationError::Status(500))
    }
}

/// Store whose every operation panics, as a row that fails to decode would
pub struct PanickingStore;

#[async_trait]
impl Store for PanickingStore {
    async fn insert_status_check(&self, _check: &StatusCheck) -> DatabaseResult<()> {
        panic!("status_checks row could not be written")
    }

    async fn list_status_checks(&self, _limit: usize) -> DatabaseResult<Vec<StatusCheck>> {
        panic!("status_checks row could not be decoded")
    }

    async fn insert_shopping_item(&self, _item: &ShoppingItem) -> DatabaseResult<()> {
        panic!("shopping_items row could not be written")
    }

    async fn insert_shopping_items(&self, _items: &[ShoppingItem]) -> DatabaseResult<u64> {
        panic!("shopping_items rows could not be written")
    }

    async fn list_shopping_items(&self, _limit: usize) -> DatabaseResult<Vec<ShoppingItem>> {
        panic!("shopping_items row could not be decoded")
    }

    async fn delete_shopping_item(&self, _id: &str) -> DatabaseResult<u64> {
        panic!("shopping_items row could not be deleted")
    }

    async fn delete_all_shopping_items(&self) -> DatabaseResult<u64> {
        panic!("shopping_items could not be cleared")
    }

    async fn find_settings(&self, _key: &str) -> DatabaseResult<Option<UserSettings>> {
        panic!("user_settings row could not be decoded")
    }

    async fn upsert_settings(&self, _key: &str, _settings: &UserSettings) -> DatabaseResult<()> {
        panic!("user_settings row could not be written")
    }

    async fn close(&self) {}
}

/// Router over a fresh in-memory store
pub fn app(client: Arc<ScriptedClient>) -> Router {
    app_with_store(Arc::new(MemoryStore::new()), client)
}

/// Router over the given store
pub fn app_with_store(store: Arc<dyn Store>, client: Arc<ScriptedClient>) -> Router {
    create_router(AppState::new(store, client))
}

/// Send a request and decode the JSON response body
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "http://localhost:3000");
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
