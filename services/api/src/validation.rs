//! Input validation utilities

use crate::{error::ApiError, models::DEFAULT_LANGUAGE};

/// Reject a required text field that is empty or only whitespace
pub fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }

    Ok(())
}

/// Resolve an optional language, falling back to the default one
pub fn language_or_default(language: Option<&str>) -> &str {
    match language.map(str::trim) {
        Some(language) if !language.is_empty() => language,
        _ => DEFAULT_LANGUAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("ingredients", "rice").is_ok());
        assert!(matches!(
            require_text("ingredients", "  \n"),
            Err(ApiError::BadRequest(msg)) if msg == "ingredients must not be empty"
        ));
    }

    #[test]
    fn test_language_or_default() {
        assert_eq!(language_or_default(None), "English");
        assert_eq!(language_or_default(Some(" ")), "English");
        assert_eq!(language_or_default(Some(" Hindi ")), "Hindi");
    }
}
