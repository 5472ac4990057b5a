//! sync.so lip-sync client.
//!
//! All scene stills go out in one batched request, each pinned to its
//! fixed timeline slot, against a single audio track.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vibeshift_core::timeline::{slot_window, TimeWindow};

use crate::error::ProviderError;
use crate::http::{parse_response, trim_base};
use crate::LipSyncer;

pub const DEFAULT_BASE_URL: &str = "https://api.sync.so";
pub const LIPSYNC_MODEL: &str = "lipsync-2";

/// One still and the slot of the song it should be synced to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LipSyncInput {
    pub url: String,
    pub window: TimeWindow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LipSyncRequest {
    pub inputs: Vec<LipSyncInput>,
    pub audio_url: String,
}

impl LipSyncRequest {
    /// Assign each image the slot matching its position.
    pub fn from_images(images: &[String], audio_url: &str) -> Self {
        Self {
            inputs: images
                .iter()
                .enumerate()
                .map(|(idx, url)| LipSyncInput {
                    url: url.clone(),
                    window: slot_window(idx),
                })
                .collect(),
            audio_url: audio_url.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    model: &'static str,
    input: Vec<InputItem<'a>>,
    audio_url: &'a str,
    options: SyncOptions,
}

#[derive(Debug, Serialize)]
struct InputItem<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    url: &'a str,
    start: u32,
    end: u32,
}

#[derive(Debug, Serialize)]
struct SyncOptions {
    output_format: &'static str,
    sync_audio: bool,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    output: Option<GenerateOutput>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateOutput {
    #[serde(default)]
    clips: Vec<String>,
}

impl<'a> GenerateBody<'a> {
    fn from_request(request: &'a LipSyncRequest) -> Self {
        Self {
            model: LIPSYNC_MODEL,
            input: request
                .inputs
                .iter()
                .map(|input| InputItem {
                    kind: "image",
                    url: &input.url,
                    start: input.window.start,
                    end: input.window.end,
                })
                .collect(),
            audio_url: &request.audio_url,
            options: SyncOptions {
                output_format: "mp4",
                sync_audio: true,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

pub struct SyncClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SyncClient {
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
impl LipSyncer for SyncClient {
    async fn lip_sync(&self, request: &LipSyncRequest) -> Result<Vec<String>, ProviderError> {
        tracing::debug!(inputs = request.inputs.len(), "Requesting lip-sync");
        let response = self
            .client
            .post(format!("{}/v2/generate", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&GenerateBody::from_request(request))
            .send()
            .await?;

        let parsed: GenerateResponse = parse_response(response).await?;
        Ok(parsed.output.map(|o| o.clips).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_get_consecutive_fifteen_second_windows() {
        let images = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let request = LipSyncRequest::from_images(&images, "https://audio/x.mp3");
        let windows: Vec<(u32, u32)> = request
            .inputs
            .iter()
            .map(|i| (i.window.start, i.window.end))
            .collect();
        assert_eq!(windows, vec![(0, 15), (15, 30), (30, 45)]);
    }

    #[test]
    fn body_matches_provider_contract() {
        let request = LipSyncRequest::from_images(&["img".to_string()], "song.mp3");
        let json = serde_json::to_value(GenerateBody::from_request(&request)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "lipsync-2",
                "input": [{"type": "image", "url": "img", "start": 0, "end": 15}],
                "audio_url": "song.mp3",
                "options": {"output_format": "mp4", "sync_audio": true}
            })
        );
    }

    #[test]
    fn missing_output_means_no_clips() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"status": "queued"}"#).unwrap();
        assert!(parsed.output.map(|o| o.clips).unwrap_or_default().is_empty());
    }
}
