//! Gemini `generateContent` client used for scene scripting.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::http::{parse_response, trim_base, API_KEY_HEADER};
use crate::TextGenerator;

/// Public Generative Language API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-pro";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2048;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .as_deref()
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Text-generation client for a Gemini model.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client against [`DEFAULT_BASE_URL`] and [`DEFAULT_TEXT_MODEL`].
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom API root (staging, local fakes).
    pub fn with_base_url(client: reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{DEFAULT_TEXT_MODEL}:generateContent",
                self.base_url
            ))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: GenerateContentResponse = parse_response(response).await?;
        parsed
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::MissingPayload("candidates[0].content.parts[0].text".into()))
    }
}
