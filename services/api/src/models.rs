//! API models for persisted documents and request/response payloads

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod recipe;

/// Language used when the caller has not chosen one
pub const DEFAULT_LANGUAGE: &str = "English";

/// Generate a fresh opaque document id
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current instant at microsecond precision, the resolution the store keeps
pub fn stamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A client check-in record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Create a new status check stamped with the current instant
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            client_name: client_name.into(),
            timestamp: stamp_now(),
        }
    }
}

/// Request for creating a status check
#[derive(Debug, Deserialize)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

/// An entry of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub added_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Create a new shopping item stamped with the current instant
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            added_at: stamp_now(),
        }
    }
}

/// Request for adding a single shopping item
#[derive(Debug, Deserialize)]
pub struct CreateShoppingItemRequest {
    pub name: String,
}

/// The persisted user settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub preferred_language: String,
    pub updated_at: DateTime<Utc>,
}

/// Request for updating the user settings
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub preferred_language: String,
}

/// Response for reading the user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub preferred_language: String,
}

/// Request for a translation
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

/// Response for a translation
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Generic response carrying a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
