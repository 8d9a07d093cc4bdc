//! Recipe models for the API service

use serde::{Deserialize, Serialize};

/// A recipe suggested by the generative model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Ingredients the recipe needs that the user did not list
    pub missing_items: Vec<String>,
}

/// Request for recipe suggestions
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRequest {
    /// Free-form list of what the user has at hand
    pub ingredients: String,
    /// Language the recipes should be written in
    #[serde(default)]
    pub language: Option<String>,
}

/// Response for recipe suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub recipes: Vec<Recipe>,
}
