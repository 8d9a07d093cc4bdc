//! Client for the Gemini text-generation API
//!
//! Services depend on the [`GenerativeClient`] trait; [`GeminiClient`] is the
//! production implementation speaking the `generateContent` REST endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, warn};

/// Error type for generative API calls
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The API answered with a non-success status
    #[error("Generative API returned status {0}")]
    Status(u16),

    /// The API answered without any candidate text
    #[error("Generative API returned no content")]
    EmptyResponse,

    /// The API answered with a body that is not a response envelope
    #[error("Generative API returned an unreadable response: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// The API could not be reached or the exchange did not complete
    #[error("Failed to reach generative API: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GenerationError {
    /// Whether the failure happened before any answer was received
    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationError::Transport(_))
    }
}

/// Single-turn text generation
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send `prompt` as a single user message and return the raw generated text
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Gemini API configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base endpoint, e.g. "https://generativelanguage.googleapis.com/v1beta"
    pub base_url: String,
    /// Model name, e.g. "gemini-1.5-flash"
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new client with the configured timeout
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
        })
    }
}

/// Request envelope for `generateContent`
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response envelope for `generateContent`
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key.
                let e = e.without_url();
                error!("Request to generative API failed: {}", e);
                GenerationError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Generative API returned status {}", status.as_u16());
            return Err(GenerationError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.without_url()))?;

        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(GenerationError::InvalidEnvelope)?;

        envelope
            .into_first_text()
            .ok_or(GenerationError::EmptyResponse)
    }
}
