//! Application state shared across handlers

use std::sync::Arc;

use crate::{
    gemini::GenerativeClient,
    repositories::Store,
    services::{
        RecipeService, SettingsService, ShoppingListService, StatusService, TranslationService,
    },
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub status: StatusService,
    pub recipes: RecipeService,
    pub translation: TranslationService,
    pub shopping_list: ShoppingListService,
    pub settings: SettingsService,
}

impl AppState {
    /// Wire every service to the given store and generative client
    pub fn new(store: Arc<dyn Store>, client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            status: StatusService::new(store.clone()),
            recipes: RecipeService::new(client.clone()),
            translation: TranslationService::new(client),
            shopping_list: ShoppingListService::new(store.clone()),
            settings: SettingsService::new(store),
        }
    }
}
