//! Imagen `predict` client used for per-scene stills.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::gemini::DEFAULT_BASE_URL;
use crate::http::{parse_response, trim_base, API_KEY_HEADER};
use crate::ImageGenerator;

pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
const DEFAULT_MIME_TYPE: &str = "image/png";

/// A generated still, either inline bytes or a hosted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Base64-encoded image bytes.
    Inline { mime_type: String, base64: String },
    /// A ready-to-use `https://` or `data:` URL.
    Url(String),
}

impl GeneratedImage {
    /// A URL usable by downstream steps; inline bytes become a data URL.
    pub fn into_url(self) -> String {
        match self {
            Self::Inline { mime_type, base64 } => format!("data:{mime_type};base64,{base64}"),
            Self::Url(url) => url,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [Instance<'a>; 1],
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    aspect_ratio: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl PredictResponse {
    /// The first prediction as a [`GeneratedImage`], preferring inline bytes.
    pub fn first_image(self) -> Option<GeneratedImage> {
        let prediction = self.predictions.into_iter().next()?;
        if let Some(base64) = prediction.bytes_base64_encoded.filter(|b| !b.is_empty()) {
            return Some(GeneratedImage::Inline {
                mime_type: prediction
                    .mime_type
                    .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
                base64,
            });
        }
        prediction
            .url
            .filter(|u| !u.is_empty())
            .map(GeneratedImage::Url)
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

pub struct ImagenClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ImagenClient {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            api_key,
        }
    }
}

#[async_trait]
impl ImageGenerator for ImagenClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ProviderError> {
        let body = PredictRequest {
            instances: [Instance { prompt }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: DEFAULT_ASPECT_RATIO,
            },
        };

        let response = self
            .client
            .post(format!("{}/models/{DEFAULT_IMAGE_MODEL}:predict", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: PredictResponse = parse_response(response).await?;
        parsed
            .first_image()
            .ok_or_else(|| ProviderError::MissingPayload("predictions[0] image".into()))
    }
}
