//! Free-text translation through the generative model

use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::gemini::{GenerationError, GenerativeClient};

/// Error type for translations
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Build the instruction prompt for a translation
pub fn build_translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text to {target_language}. \
         Return only the translated text without any additional explanations:\n\n{text}"
    )
}

/// Service translating text with the generative model
#[derive(Clone)]
pub struct TranslationService {
    client: Arc<dyn GenerativeClient>,
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Translate `text` into `target_language`
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let prompt = build_translation_prompt(text, target_language);

        let raw = self.client.generate(&prompt).await.map_err(|e| {
            error!("Translation request failed: {}", e);
            e
        })?;

        Ok(raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{Reply, StubClient};

    #[test]
    fn test_prompt_carries_text_and_language() {
        let prompt = build_translation_prompt("Hello World", "Hindi");

        assert!(prompt.starts_with("Translate the following text to Hindi."));
        assert!(prompt.ends_with("\n\nHello World"));
        assert!(prompt.contains("without any additional explanations"));
    }

    #[tokio::test]
    async fn test_translation_is_trimmed() {
        let client = Arc::new(StubClient::text("\n  नमस्ते दुनिया \n"));
        let service = TranslationService::new(client.clone());

        let translated = service.translate("Hello World", "Hindi").await.unwrap();

        assert_eq!(translated, "नमस्ते दुनिया");
        assert_ne!(translated, "Hello World");
        assert!(client.last_prompt().contains("Hello World"));
    }

    #[tokio::test]
    async fn test_empty_response_is_generation_error() {
        let service = TranslationService::new(Arc::new(StubClient::new(Reply::Empty)));

        let err = service.translate("Hello", "French").await.unwrap_err();
        assert!(matches!(
            err,
            TranslationError::Generation(GenerationError::EmptyResponse)
        ));
    }
}
