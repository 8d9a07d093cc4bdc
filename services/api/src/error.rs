//! Custom error types for the API service

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::{RecipeError, ShoppingListError, TranslationError};

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Well-formed body with missing or wrongly typed fields
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error with a message safe to show to the caller
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(message: &str) -> Self {
        ApiError::Internal(message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::UnprocessableEntity(rejection.body_text())
            }
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::Generation(e) if e.is_transport() => {
                ApiError::internal("Failed to connect to AI service")
            }
            RecipeError::Generation(_) => ApiError::internal("AI service returned an error"),
            RecipeError::Parse(_) => {
                ApiError::internal("Failed to parse recipe data from AI response")
            }
            RecipeError::Validation(_) => {
                ApiError::internal("AI response did not match the recipe format")
            }
        }
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::Generation(e) if e.is_transport() => {
                ApiError::internal("Failed to connect to translation service")
            }
            TranslationError::Generation(_) => ApiError::internal("Translation failed"),
        }
    }
}

impl From<ShoppingListError> for ApiError {
    fn from(err: ShoppingListError) -> Self {
        match err {
            ShoppingListError::NotFound(_) => {
                ApiError::NotFound("Shopping item not found".to_string())
            }
            ShoppingListError::Database(e) => {
                tracing::error!("Shopping list store operation failed: {}", e);
                ApiError::internal("Shopping list operation failed")
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
