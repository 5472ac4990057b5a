//! HTTP clients for the external AI providers used by the generation
//! pipeline.
//!
//! Each provider sits behind a small async trait so the pipeline can be
//! driven by fakes in tests:
//!
//! | Trait              | Client               | Service                         |
//! |--------------------|----------------------|---------------------------------|
//! | [`TextGenerator`]  | [`GeminiClient`]     | Gemini `generateContent`        |
//! | [`ImageGenerator`] | [`ImagenClient`]     | Imagen `predict`                |
//! | [`LipSyncer`]      | [`SyncClient`]       | sync.so `v2/generate`           |
//! | [`VideoRenderer`]  | [`ShotstackClient`]  | Shotstack `edit/v1/render`      |

pub mod error;
pub mod gemini;
mod http;
pub mod imagen;
pub mod shotstack;
pub mod sync;

use async_trait::async_trait;

pub use error::ProviderError;
pub use gemini::GeminiClient;
pub use http::build_http_client;
pub use imagen::{GeneratedImage, ImagenClient};
pub use shotstack::{RenderClip, RenderTimeline, ShotstackClient};
pub use sync::{LipSyncInput, LipSyncRequest, SyncClient};

/// Free-text generation from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Single still image from a prompt.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ProviderError>;
}

/// Batched lip-sync of stills against an audio track.
#[async_trait]
pub trait LipSyncer: Send + Sync {
    /// Returns the clip references in input order.
    async fn lip_sync(&self, request: &LipSyncRequest) -> Result<Vec<String>, ProviderError>;
}

/// Asynchronous render of a clip timeline into one video.
#[async_trait]
pub trait VideoRenderer: Send + Sync {
    /// Submit the timeline and return the provider's render job id.
    async fn submit_render(&self, timeline: &RenderTimeline) -> Result<String, ProviderError>;
}
