//! User settings stored as a single keyed document

use common::error::DatabaseResult;
use std::sync::Arc;
use tracing::info;

use crate::{
    models::{DEFAULT_LANGUAGE, SettingsResponse, UserSettings, stamp_now},
    repositories::Store,
};

/// Key of the one settings document
pub const SETTINGS_KEY: &str = "default";

/// Service reading and writing the user settings
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn Store>,
}

impl SettingsService {
    /// Create a new settings service
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Current settings, or the defaults when nothing was saved yet
    pub async fn get(&self) -> DatabaseResult<SettingsResponse> {
        let preferred_language = self
            .store
            .find_settings(SETTINGS_KEY)
            .await?
            .map(|settings| settings.preferred_language)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(SettingsResponse { preferred_language })
    }

    /// Save the preferred language, creating the document if needed
    pub async fn update(&self, preferred_language: String) -> DatabaseResult<()> {
        let settings = UserSettings {
            preferred_language,
            updated_at: stamp_now(),
        };
        self.store.upsert_settings(SETTINGS_KEY, &settings).await?;

        info!("Preferred language set to {}", settings.preferred_language);
        Ok(())
    }
}
