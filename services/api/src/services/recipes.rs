//! Recipe suggestions from the generative model

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::{
    extract::{ExtractError, extract_json},
    gemini::{GenerationError, GenerativeClient},
    models::recipe::RecipeResponse,
};

/// Number of recipes requested per call
pub const RECIPE_COUNT: usize = 2;

/// Format guide embedded in the prompt. It only shows the shape of the answer.
const FORMAT_EXAMPLE: &str = r#"{
  "recipes": [
    {
      "name": "Garlic Butter Pasta",
      "description": "A quick weeknight pasta tossed in garlic butter.",
      "ingredients": ["Pasta", "Butter", "Garlic", "Parmesan", "Salt"],
      "steps": ["Boil the pasta", "Melt butter with garlic", "Toss pasta in the butter", "Top with parmesan"],
      "missing_items": ["Parmesan", "Salt"]
    }
  ]
}"#;

/// Error type for recipe generation
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Parse(#[from] ExtractError),

    /// The model answered with JSON of the wrong shape
    #[error("Model output does not match the recipe format: {0}")]
    Validation(String),
}

/// Build the instruction prompt for a recipe request
pub fn build_recipe_prompt(ingredients: &str, language: &str) -> String {
    format!(
        r#"You are an expert chef and a friendly cooking assistant.

The user has these ingredients: {ingredients}.

Task:
1. Suggest exactly {RECIPE_COUNT} simple recipes the user can cook with these ingredients.
2. Every recipe must have these fields:
   - "name" (string): the recipe title
   - "description" (string): one or two lines describing the dish
   - "ingredients" (array of strings): every ingredient the recipe needs
   - "steps" (array of strings): the cooking steps in order
   - "missing_items" (array of strings): needed ingredients the user does not have

Rules:
- Answer with valid JSON only.
- Do not add any text, explanation or formatting outside the JSON.
- Write every value in {language}.
- The example below shows the format only. Do not reuse its content.

Format example:
{FORMAT_EXAMPLE}"#
    )
}

/// Service turning a list of ingredients into recipe suggestions
#[derive(Clone)]
pub struct RecipeService {
    client: Arc<dyn GenerativeClient>,
}

impl RecipeService {
    /// Create a new recipe service
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Ask the model for recipes and validate the answer
    pub async fn get_recipes(
        &self,
        ingredients: &str,
        language: &str,
    ) -> Result<RecipeResponse, RecipeError> {
        let prompt = build_recipe_prompt(ingredients, language);

        let raw = self.client.generate(&prompt).await.map_err(|e| {
            error!("Recipe generation request failed: {}", e);
            e
        })?;

        let value = extract_json(&raw).map_err(|e| {
            error!(raw = %e.raw, "Failed to parse recipe data from AI response: {}", e);
            e
        })?;

        let response: RecipeResponse = serde_json::from_value(value).map_err(|e| {
            error!(raw = %raw, "AI response does not match the recipe format: {}", e);
            RecipeError::Validation(e.to_string())
        })?;

        if response.recipes.is_empty() {
            error!(raw = %raw, "AI response contains no recipes");
            return Err(RecipeError::Validation("no recipes returned".to_string()));
        }

        info!(
            "Generated {} recipes in {}",
            response.recipes.len(),
            language
        );
        Ok(response)
    }
}
