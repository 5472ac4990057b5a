//! Fake providers for driving the pipeline without network access.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vibeshift_pipeline::{GenerationPipeline, MemoryStore, Providers};
use vibeshift_providers::{
    GeneratedImage, ImageGenerator, LipSyncRequest, LipSyncer, ProviderError, RenderTimeline,
    TextGenerator, VideoRenderer,
};

fn api_error(status: u16) -> ProviderError {
    ProviderError::Api {
        status,
        body: "fake failure".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Language model
// ---------------------------------------------------------------------------

pub struct FakeText {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeText {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextGenerator for FakeText {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or_else(|| api_error(503))
    }
}

/// A well-formed four-scene script wrapped in chatty markdown.
pub fn script_reply() -> String {
    let json = serde_json::json!({
        "scenes": [
            {"scene_number": 1, "visual_prompt": "Rain on a neon window", "mood": "moody", "duration_seconds": 15},
            {"scene_number": 2, "visual_prompt": "Singer on a rooftop", "mood": "defiant", "duration_seconds": 15},
            {"scene_number": 3, "visual_prompt": "Car chase through tunnels", "mood": "urgent", "duration_seconds": 15},
            {"scene_number": 4, "visual_prompt": "Fireworks over the harbor", "mood": "joyful", "duration_seconds": 15}
        ]
    });
    format!("Sure! Here's the treatment:\n```json\n{json:#}\n```")
}

// ---------------------------------------------------------------------------
// Image model
// ---------------------------------------------------------------------------

pub struct FakeImages {
    /// Zero-based call indices that fail.
    failing_calls: Vec<usize>,
    calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeImages {
    pub fn succeeding() -> Arc<Self> {
        Self::failing_calls(&[])
    }

    pub fn failing() -> Arc<Self> {
        Self::failing_calls(&[0, 1, 2, 3])
    }

    pub fn failing_calls(calls: &[usize]) -> Arc<Self> {
        Arc::new(Self {
            failing_calls: calls.to_vec(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ImageGenerator for FakeImages {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.failing_calls.contains(&call) {
            return Err(api_error(500));
        }
        if call % 2 == 0 {
            Ok(GeneratedImage::Inline {
                mime_type: "image/png".to_string(),
                base64: format!("IMG{call}"),
            })
        } else {
            Ok(GeneratedImage::Url(format!("https://img.example/{call}.png")))
        }
    }
}

// ---------------------------------------------------------------------------
// Lip-sync
// ---------------------------------------------------------------------------

pub struct FakeLipSync {
    clips: Option<Vec<String>>,
    pub requests: Mutex<Vec<LipSyncRequest>>,
}

impl FakeLipSync {
    pub fn returning(clips: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            clips: Some(clips.iter().map(|c| c.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            clips: None,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LipSyncer for FakeLipSync {
    async fn lip_sync(&self, request: &LipSyncRequest) -> Result<Vec<String>, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        self.clips.clone().ok_or_else(|| api_error(502))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

pub struct FakeRenderer {
    render_id: Option<String>,
    pub timelines: Mutex<Vec<RenderTimeline>>,
}

impl FakeRenderer {
    pub fn returning(render_id: &str) -> Arc<Self> {
        Arc::new(Self {
            render_id: Some(render_id.to_string()),
            timelines: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            render_id: None,
            timelines: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl VideoRenderer for FakeRenderer {
    async fn submit_render(&self, timeline: &RenderTimeline) -> Result<String, ProviderError> {
        self.timelines.lock().unwrap().push(timeline.clone());
        self.render_id
            .clone()
            .ok_or_else(|| ProviderError::MissingPayload("response.id".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

/// A memory store with one registered project.
pub fn store_with_project() -> (Arc<MemoryStore>, uuid::Uuid) {
    let store = Arc::new(MemoryStore::new());
    let project_id = uuid::Uuid::new_v4();
    store.add_project(project_id);
    (store, project_id)
}

pub fn pipeline(store: &Arc<MemoryStore>, providers: Providers) -> GenerationPipeline {
    GenerationPipeline::new(store.clone(), providers)
}
