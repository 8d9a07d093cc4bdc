//! API service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        CreateShoppingItemRequest, CreateStatusCheckRequest, MessageResponse, SettingsResponse,
        ShoppingItem, StatusCheck, TranslateRequest, TranslateResponse, UpdateSettingsRequest,
        recipe::{RecipeRequest, RecipeResponse},
    },
    state::AppState,
    validation::{language_or_default, require_text},
};

/// JSON body whose rejection is reported as an [`ApiError`]
type JsonBody<T> = WithRejection<Json<T>, ApiError>;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/status", get(get_status_checks).post(create_status_check))
        .route("/api/recipes", post(get_recipes))
        .route("/api/translate", post(translate_text))
        .route(
            "/api/shopping-list",
            get(get_shopping_list)
                .post(add_shopping_item)
                .delete(clear_shopping_list),
        )
        .route("/api/shopping-list/bulk", post(add_bulk_shopping_items))
        .route("/api/shopping-list/:item_id", delete(delete_shopping_item))
        .route("/api/settings", get(get_settings).post(update_settings))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a panicking handler into a 500 with the usual error body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Request handler panicked: {}", detail);

    ApiError::internal("Internal server error").into_response()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "recipe-api"
    }))
}

/// API banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("AI Recipe & Grocery Assistant API"))
}

/// Record a client status check
pub async fn create_status_check(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<CreateStatusCheckRequest>,
) -> ApiResult<Json<StatusCheck>> {
    let check = state
        .status
        .create(payload.client_name)
        .await
        .map_err(|e| {
            error!("Failed to create status check: {}", e);
            ApiError::internal("Failed to create status check")
        })?;

    Ok(Json(check))
}

/// List client status checks
pub async fn get_status_checks(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StatusCheck>>> {
    let checks = state.status.list().await.map_err(|e| {
        error!("Failed to fetch status checks: {}", e);
        ApiError::internal("Failed to fetch status checks")
    })?;

    Ok(Json(checks))
}

/// Suggest recipes for the given ingredients
pub async fn get_recipes(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<RecipeRequest>,
) -> ApiResult<Json<RecipeResponse>> {
    require_text("ingredients", &payload.ingredients)?;
    let language = language_or_default(payload.language.as_deref());

    let response = state
        .recipes
        .get_recipes(&payload.ingredients, language)
        .await?;

    Ok(Json(response))
}

/// Translate a piece of text
pub async fn translate_text(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<TranslateRequest>,
) -> ApiResult<Json<TranslateResponse>> {
    require_text("text", &payload.text)?;
    require_text("target_language", &payload.target_language)?;

    let translated_text = state
        .translation
        .translate(&payload.text, &payload.target_language)
        .await?;

    Ok(Json(TranslateResponse { translated_text }))
}

/// List the shopping items
pub async fn get_shopping_list(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ShoppingItem>>> {
    let items = state.shopping_list.list().await.map_err(|e| {
        error!("Failed to fetch shopping list: {}", e);
        ApiError::internal("Failed to fetch shopping list")
    })?;

    Ok(Json(items))
}

/// Add a single shopping item
pub async fn add_shopping_item(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<CreateShoppingItemRequest>,
) -> ApiResult<Json<ShoppingItem>> {
    let item = state
        .shopping_list
        .add_one(payload.name)
        .await
        .map_err(|e| {
            error!("Failed to add shopping item: {}", e);
            ApiError::internal("Failed to add shopping item")
        })?;

    Ok(Json(item))
}

/// Add one shopping item per name
pub async fn add_bulk_shopping_items(
    State(state): State<AppState>,
    WithRejection(Json(names), _): JsonBody<Vec<String>>,
) -> ApiResult<Json<MessageResponse>> {
    let added = state.shopping_list.add_many(names).await.map_err(|e| {
        error!("Failed to add shopping items: {}", e);
        ApiError::internal("Failed to add shopping items")
    })?;

    Ok(Json(MessageResponse::new(format!(
        "Added {added} items to shopping list"
    ))))
}

/// Remove every shopping item
pub async fn clear_shopping_list(
    State(state): State<AppState>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = state.shopping_list.clear().await.map_err(|e| {
        error!("Failed to clear shopping list: {}", e);
        ApiError::internal("Failed to clear shopping list")
    })?;

    Ok(Json(MessageResponse::new(format!(
        "Cleared {removed} items from shopping list"
    ))))
}

/// Remove a single shopping item
pub async fn delete_shopping_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.shopping_list.delete_one(&item_id).await?;

    Ok(Json(MessageResponse::new(
        "Shopping item deleted successfully",
    )))
}

/// Read the user settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<SettingsResponse>> {
    let settings = state.settings.get().await.map_err(|e| {
        error!("Failed to fetch user settings: {}", e);
        ApiError::internal("Failed to fetch user settings")
    })?;

    Ok(Json(settings))
}

/// Save the user settings
pub async fn update_settings(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<UpdateSettingsRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .settings
        .update(payload.preferred_language)
        .await
        .map_err(|e| {
            error!("Failed to update user settings: {}", e);
            ApiError::internal("Failed to update settings")
        })?;

    Ok(Json(MessageResponse::new("Settings updated successfully")))
}
