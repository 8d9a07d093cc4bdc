//! JSON extraction from free-form model output
//!
//! Models often wrap JSON answers in markdown code fences. The stripping here
//! is a heuristic: it looks at the first fenced block only, so output with
//! several blocks, or prose containing stray fences, may not decode.

use serde_json::Value;
use thiserror::Error;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Model output that could not be decoded as JSON
#[derive(Debug, Error)]
#[error("Model output is not valid JSON: {source}")]
pub struct ExtractError {
    /// The text exactly as returned by the model, for diagnostics only
    pub raw: String,
    #[source]
    pub source: serde_json::Error,
}

/// Return the payload of the first code fence in `raw`, or `raw` itself
///
/// A fence tagged `json` takes precedence over an untagged one. An opening
/// fence without a closing one yields everything after the opening fence.
pub fn strip_code_fence(raw: &str) -> &str {
    let opened = raw
        .split_once(JSON_FENCE)
        .or_else(|| raw.split_once(FENCE))
        .map(|(_, rest)| rest);

    match opened {
        Some(rest) => rest.split_once(FENCE).map_or(rest, |(inner, _)| inner),
        None => raw,
    }
}

/// Decode the JSON payload of a model answer
pub fn extract_json(raw: &str) -> Result<Value, ExtractError> {
    serde_json::from_str(strip_code_fence(raw).trim()).map_err(|source| ExtractError {
        raw: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "recipes": [{"name": "Tomato Rice", "steps": ["Cook rice", "Mix"]}],
            "count": 1,
            "nested": {"ok": true, "none": null}
        })
    }

    #[test]
    fn test_plain_json() {
        let text = sample().to_string();
        assert_eq!(extract_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_json_tagged_fence() {
        let text = format!("```json\n{}\n```", serde_json::to_string_pretty(&sample()).unwrap());
        assert_eq!(extract_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_json_fence_surrounded_by_prose() {
        let text = format!(
            "Here are your recipes:\n```json\n{}\n```\nEnjoy your meal!",
            sample()
        );
        assert_eq!(extract_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_untagged_fence() {
        let text = format!("```\n{}\n```", sample());
        assert_eq!(extract_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_json_fence_wins_over_earlier_untagged_fence() {
        let text = format!("```\nnot this\n```\n```json\n{}\n```", sample());
        assert_eq!(extract_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_unclosed_fence_takes_the_rest() {
        let text = format!("```json\n{}\n", sample());
        assert_eq!(extract_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let text = format!("\n\n   {}  \n\t", sample());
        assert_eq!(extract_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_strip_code_fence_without_fence_is_identity() {
        assert_eq!(strip_code_fence("no fences here"), "no fences here");
    }

    #[test]
    fn test_parse_error_keeps_raw_text() {
        let raw = "```json\nSorry, I cannot help with that.\n```";
        let err = extract_json(raw).unwrap_err();
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn test_prose_without_fence_fails() {
        let err = extract_json("Here is a recipe: {\"name\": \"Soup\"}").unwrap_err();
        assert!(err.source.is_syntax());
    }
}
