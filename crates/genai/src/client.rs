//! REST client for a Gemini-style `generateContent` API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::GenAiError;

/// Environment variable holding the generation API key.
pub const API_KEY_ENV: &str = "GENAI_API_KEY";

/// Environment variable overriding the generation API base.
pub const API_BASE_ENV: &str = "GENAI_API_BASE";

/// Default generation API base.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fast model used for short copy.
pub const FLASH_MODEL: &str = "gemini-2.5-flash";

/// Heavier model used for analysis and reporting.
pub const PRO_MODEL: &str = "gemini-3-pro-preview";

/// HTTP request timeout for a single generation call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Text generation seam.
///
/// `Ok` may carry an empty string; the copy layer maps both empty
/// responses and errors to fixed fallback text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenAiError>;
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts; empty when the
    /// response carried no text at all.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// HTTP client for the hosted generation API.
///
/// A client without an API key is degraded, not broken: every call
/// returns [`GenAiError::NoApiKey`] and the copy layer falls back to
/// canned text.
pub struct GeminiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client with an API key against the default base.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base(Some(api_key.into()), DEFAULT_API_BASE.to_string())
    }

    /// Create a client from `GENAI_API_KEY` / `GENAI_API_BASE`.
    ///
    /// A missing key is logged once here; the client still works as an
    /// always-fallback generator.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            tracing::warn!(
                "No generation API key configured, all copy will use fallback text"
            );
        }
        let api_base =
            std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::with_base(api_key, api_base)
    }

    /// Create a client against an explicit API base.
    pub fn with_base(api_key: Option<String>, api_base: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            api_base,
            api_key,
        }
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenAiError> {
        let key = self.api_key.as_deref().ok_or(GenAiError::NoApiKey)?;

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.api_base, model
            ))
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}
