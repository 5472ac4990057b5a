use std::time::Duration;

use vibeshift_providers::{gemini, shotstack, sync};

/// Provider credentials and endpoints for the generation pipeline.
///
/// Passed explicitly into [`crate::GenerationPipeline`] so tests can build
/// one by hand instead of touching the process environment. A `None` key
/// disables the step(s) that need it.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Google API key for both scene scripting and image generation.
    pub vertex_api_key: Option<String>,
    /// sync.so key for the lip-sync step.
    pub sync_api_key: Option<String>,
    /// Shotstack key for the final render step.
    pub shotstack_api_key: Option<String>,
    pub gemini_base_url: String,
    pub sync_base_url: String,
    pub shotstack_base_url: String,
    /// Per-request timeout applied to every provider call.
    pub provider_timeout_secs: u64,
    /// Issue the per-scene image requests concurrently instead of one by one.
    pub parallel_images: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            vertex_api_key: None,
            sync_api_key: None,
            shotstack_api_key: None,
            gemini_base_url: gemini::DEFAULT_BASE_URL.to_string(),
            sync_base_url: sync::DEFAULT_BASE_URL.to_string(),
            shotstack_base_url: shotstack::DEFAULT_BASE_URL.to_string(),
            provider_timeout_secs: 120,
            parallel_images: false,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                           |
    /// |-------------------------|---------------------------------------------------|
    /// | `VERTEX_API_KEY`        | unset                                             |
    /// | `SYNC_SO_API_KEY`       | unset                                             |
    /// | `SHOTSTACK_API_KEY`     | unset                                             |
    /// | `GEMINI_BASE_URL`       | `https://generativelanguage.googleapis.com/v1beta`|
    /// | `SYNC_BASE_URL`         | `https://api.sync.so`                             |
    /// | `SHOTSTACK_BASE_URL`    | `https://api.shotstack.io`                        |
    /// | `PROVIDER_TIMEOUT_SECS` | `120`                                             |
    /// | `PARALLEL_IMAGES`       | `false`                                           |
    ///
    /// Empty keys count as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let provider_timeout_secs: u64 = std::env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.provider_timeout_secs.to_string())
            .parse()
            .expect("PROVIDER_TIMEOUT_SECS must be a valid u64");

        let parallel_images = std::env::var("PARALLEL_IMAGES")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.parallel_images);

        Self {
            vertex_api_key: non_empty_var("VERTEX_API_KEY"),
            sync_api_key: non_empty_var("SYNC_SO_API_KEY"),
            shotstack_api_key: non_empty_var("SHOTSTACK_API_KEY"),
            gemini_base_url: non_empty_var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            sync_base_url: non_empty_var("SYNC_BASE_URL").unwrap_or(defaults.sync_base_url),
            shotstack_base_url: non_empty_var("SHOTSTACK_BASE_URL")
                .unwrap_or(defaults.shotstack_base_url),
            provider_timeout_secs,
            parallel_images,
        }
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
