//! Service configuration loaded from the environment

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;

use crate::gemini::GeminiConfig;

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Which store implementation backs the collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Service configuration
///
/// # Environment Variables
/// - `SERVER_HOST`: Bind address (default: "0.0.0.0")
/// - `SERVER_PORT`: Bind port (default: 8001)
/// - `STORE_BACKEND`: "postgres" or "memory" (default: "postgres")
/// - `GEMINI_API_KEY`: API key for the generative API (required)
/// - `GEMINI_API_URL`: Base endpoint of the generative API
/// - `GEMINI_MODEL`: Model name (default: "gemini-1.5-flash")
/// - `GEMINI_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
///
/// Database settings are read separately by `common::database::DatabaseConfig`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub store_backend: StoreBackend,
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub gemini_timeout_secs: u64,
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::default())
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8001)?
            .set_default("store_backend", "postgres")?
            .set_default("gemini_api_url", DEFAULT_GEMINI_API_URL)?
            .set_default("gemini_model", DEFAULT_GEMINI_MODEL)?
            .set_default("gemini_timeout_secs", 30)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Settings for the generative API client
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini_api_key.clone(),
            base_url: self.gemini_api_url.clone(),
            model: self.gemini_model.clone(),
            timeout: Duration::from_secs(self.gemini_timeout_secs),
        }
    }
}
