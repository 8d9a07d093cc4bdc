//! Domain services behind the HTTP handlers
//!
//! Each service owns its collaborators behind `Arc` handles, so cloning a
//! service is cheap and every request works on the same store and client.

pub mod recipes;
pub mod settings;
pub mod shopping_list;
pub mod status;
pub mod translation;

pub use recipes::{RecipeError, RecipeService};
pub use settings::SettingsService;
pub use shopping_list::{ShoppingListError, ShoppingListService};
pub use status::StatusService;
pub use translation::{TranslationError, TranslationService};

/// Maximum number of documents returned by a listing
pub const MAX_LIST_LEN: usize = 1000;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::gemini::{GenerationError, GenerativeClient};

    /// Canned outcome of a generation call
    pub(crate) enum Reply {
        Text(String),
        Status(u16),
        Empty,
    }

    /// Generative client answering every prompt with the same reply
    pub(crate) struct StubClient {
        reply: Reply,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl StubClient {
        pub(crate) fn new(reply: Reply) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn text(text: &str) -> Self {
            Self::new(Reply::Text(text.to_string()))
        }

        pub(crate) fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl GenerativeClient for StubClient {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Status(code) => Err(GenerationError::Status(*code)),
                Reply::Empty => Err(GenerationError::EmptyResponse),
            }
        }
    }
}
