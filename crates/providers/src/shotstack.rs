//! Shotstack render client used to stitch the final video.
//!
//! Rendering is asynchronous on Shotstack's side: submission returns a job
//! id and the finished URL is resolved out-of-band.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vibeshift_core::asset::AssetKind;
use vibeshift_core::timeline::{slot_window, CLIP_DURATION_SECS, TRANSITION_FADE_IN};

use crate::error::ProviderError;
use crate::http::{parse_response, trim_base};
use crate::VideoRenderer;

pub const DEFAULT_BASE_URL: &str = "https://api.shotstack.io";

const BACKGROUND: &str = "#000000";
const OUTPUT_FORMAT: &str = "mp4";
const OUTPUT_RESOLUTION: &str = "hd";
const OUTPUT_FPS: u32 = 30;

/// One entry on the render timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderClip {
    pub kind: AssetKind,
    pub src: String,
    pub start: u32,
    pub length: u32,
    pub effect: &'static str,
}

/// Single-track timeline submitted for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderTimeline {
    pub clips: Vec<RenderClip>,
}

impl RenderTimeline {
    /// Lay `sources` end to end in fixed slots, each fading in.
    pub fn from_sources(sources: &[String], kind: AssetKind) -> Self {
        Self {
            clips: sources
                .iter()
                .enumerate()
                .map(|(idx, src)| RenderClip {
                    kind,
                    src: src.clone(),
                    start: slot_window(idx).start,
                    length: CLIP_DURATION_SECS,
                    effect: TRANSITION_FADE_IN,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct RenderBody<'a> {
    timeline: TimelineBody<'a>,
    output: OutputBody,
}

#[derive(Debug, Serialize)]
struct TimelineBody<'a> {
    background: &'static str,
    tracks: [TrackBody<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TrackBody<'a> {
    clips: Vec<ClipBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ClipBody<'a> {
    asset: ClipAsset<'a>,
    start: u32,
    length: u32,
    effect: &'static str,
}

#[derive(Debug, Serialize)]
struct ClipAsset<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    src: &'a str,
}

#[derive(Debug, Serialize)]
struct OutputBody {
    format: &'static str,
    resolution: &'static str,
    fps: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RenderResponse {
    #[serde(default)]
    response: Option<RenderResponseInner>,
}

#[derive(Debug, Default, Deserialize)]
struct RenderResponseInner {
    #[serde(default)]
    id: Option<String>,
}

impl<'a> RenderBody<'a> {
    fn from_timeline(timeline: &'a RenderTimeline) -> Self {
        Self {
            timeline: TimelineBody {
                background: BACKGROUND,
                tracks: [TrackBody {
                    clips: timeline
                        .clips
                        .iter()
                        .map(|clip| ClipBody {
                            asset: ClipAsset {
                                kind: clip.kind.as_str(),
                                src: &clip.src,
                            },
                            start: clip.start,
                            length: clip.length,
                            effect: clip.effect,
                        })
                        .collect(),
                }],
            },
            output: OutputBody {
                format: OUTPUT_FORMAT,
                resolution: OUTPUT_RESOLUTION,
                fps: OUTPUT_FPS,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

pub struct ShotstackClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ShotstackClient {
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
impl VideoRenderer for ShotstackClient {
    async fn submit_render(&self, timeline: &RenderTimeline) -> Result<String, ProviderError> {
        tracing::debug!(clips = timeline.clips.len(), "Submitting render");
        let response = self
            .client
            .post(format!("{}/edit/v1/render", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&RenderBody::from_timeline(timeline))
            .send()
            .await?;

        let parsed: RenderResponse = parse_response(response).await?;
        parsed
            .response
            .and_then(|r| r.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProviderError::MissingPayload("response.id".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_from_images_uses_fixed_slots_and_fade() {
        let sources = vec!["a.png".to_string(), "b.png".to_string()];
        let timeline = RenderTimeline::from_sources(&sources, AssetKind::Image);
        assert_eq!(timeline.clips.len(), 2);
        assert_eq!(timeline.clips[1].start, 15);
        assert!(timeline.clips.iter().all(|c| c.length == 15 && c.effect == "fadeIn"));
    }

    #[test]
    fn body_matches_provider_contract() {
        let timeline = RenderTimeline::from_sources(&["clip.mp4".to_string()], AssetKind::Video);
        let json = serde_json::to_value(RenderBody::from_timeline(&timeline)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "timeline": {
                    "background": "#000000",
                    "tracks": [{"clips": [{
                        "asset": {"type": "video", "src": "clip.mp4"},
                        "start": 0,
                        "length": 15,
                        "effect": "fadeIn"
                    }]}]
                },
                "output": {"format": "mp4", "resolution": "hd", "fps": 30}
            })
        );
    }
}
