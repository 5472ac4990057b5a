//! Orchestrates the four steps for one project.

use std::sync::Arc;

use vibeshift_core::asset::{
    pending_render_url, AssetKind, FINAL_VIDEO_ORDER_INDEX, FINAL_VIDEO_PROMPT,
};
use vibeshift_core::scene::Scene;
use vibeshift_core::status::ProjectStatus;
use vibeshift_core::types::DbId;
use vibeshift_db::models::asset::CreateAsset;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::providers::{ProviderAvailability, Providers};
use crate::request::{GenerationRequest, GenerationSummary};
use crate::steps;
use crate::store::GenerationStore;

/// Lyrics → scene script → stills → lip-synced clips → submitted render.
///
/// A run is a straight sequence of awaited calls. Provider failures are
/// absorbed step by step; only store failures (and an unknown project) abort
/// the run. There is no idempotency guard: running the same request twice
/// writes a second set of assets.
pub struct GenerationPipeline {
    store: Arc<dyn GenerationStore>,
    providers: Providers,
    parallel_images: bool,
}

impl GenerationPipeline {
    pub fn new(store: Arc<dyn GenerationStore>, providers: Providers) -> Self {
        Self {
            store,
            providers,
            parallel_images: false,
        }
    }

    /// Build real provider clients from `config`.
    pub fn from_config(
        config: &PipelineConfig,
        store: Arc<dyn GenerationStore>,
    ) -> Result<Self, PipelineError> {
        let providers = Providers::from_config(config)?;
        Ok(Self::new(store, providers).parallel_images(config.parallel_images))
    }

    pub fn parallel_images(mut self, parallel: bool) -> Self {
        self.parallel_images = parallel;
        self
    }

    pub fn availability(&self) -> ProviderAvailability {
        self.providers.availability()
    }

    pub async fn run(&self, request: &GenerationRequest) -> Result<GenerationSummary, PipelineError> {
        let project_id = request.project_id;
        tracing::info!(%project_id, "Starting generation");

        self.set_status(project_id, ProjectStatus::Processing).await?;

        // Step 1: scene script.
        let script = steps::script_scenes(self.providers.text.as_deref(), &request.lyrics).await;
        tracing::info!(%project_id, outcome = script.label(), "Scene scripting finished");
        let scenes = script.into_value().unwrap_or_default();

        // Step 2: stills, persisted together once the step is done.
        let images = steps::generate_images(
            self.providers.image.as_deref(),
            &scenes,
            self.parallel_images,
        )
        .await;
        tracing::info!(%project_id, outcome = images.label(), "Image generation finished");
        let images = images.into_value().unwrap_or_default();
        self.store_images(project_id, &scenes, &images).await;

        // Step 3: lip-sync.
        let animation = steps::animate(
            self.providers.lip_sync.as_deref(),
            &images,
            request.audio_url.as_deref(),
        )
        .await;
        tracing::info!(%project_id, outcome = animation.label(), "Lip-sync finished");
        let clips = animation.into_value().unwrap_or_default();

        // Step 4: final render.
        let render = steps::render_final(self.providers.renderer.as_deref(), &clips, &images).await;
        tracing::info!(%project_id, outcome = render.label(), "Final render finished");
        let final_video = match render.into_value() {
            Some(render_id) => Some(self.store_pending_video(project_id, &render_id).await),
            None => None,
        };

        let status = ProjectStatus::after_generation(final_video.is_some());
        self.set_status(project_id, status).await?;

        tracing::info!(%project_id, %status, "Generation complete");

        Ok(GenerationSummary {
            success: true,
            project_id,
            scenes: scenes.len(),
            images_generated: images.len(),
            synced_clips: clips.len(),
            final_video,
        })
    }

    async fn set_status(&self, project_id: DbId, status: ProjectStatus) -> Result<(), PipelineError> {
        if self.store.set_project_status(project_id, status).await? {
            Ok(())
        } else {
            Err(PipelineError::ProjectNotFound(project_id))
        }
    }

    /// Insert one image asset per scene. Insert failures are logged only.
    async fn store_images(&self, project_id: DbId, scenes: &[Scene], images: &[String]) {
        let prompts = scenes
            .iter()
            .map(|s| s.visual_prompt.as_str())
            .chain(std::iter::repeat(""));
        for ((order_index, url), prompt) in (0_i32..).zip(images).zip(prompts) {
            let asset = CreateAsset {
                project_id,
                asset_type: AssetKind::Image,
                url: url.clone(),
                prompt_used: prompt.to_string(),
                order_index,
            };
            if let Err(e) = self.store.insert_asset(&asset).await {
                tracing::warn!(%project_id, order_index, error = %e, "Failed to store image asset");
            }
        }
        tracing::info!(%project_id, count = images.len(), "Stored image assets");
    }

    /// Insert the pending final-video asset and return its sentinel URL.
    async fn store_pending_video(&self, project_id: DbId, render_id: &str) -> String {
        let url = pending_render_url(render_id);
        let asset = CreateAsset {
            project_id,
            asset_type: AssetKind::Video,
            url: url.clone(),
            prompt_used: FINAL_VIDEO_PROMPT.to_string(),
            order_index: FINAL_VIDEO_ORDER_INDEX,
        };
        if let Err(e) = self.store.insert_asset(&asset).await {
            tracing::warn!(%project_id, error = %e, "Failed to store pending video asset");
        }
        url
    }
}
