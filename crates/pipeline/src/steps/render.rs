use vibeshift_core::asset::AssetKind;
use vibeshift_providers::{RenderTimeline, VideoRenderer};

use crate::outcome::StepOutcome;

/// Step 4: submit the final stitch and return the render job id.
///
/// Prefers lip-synced clips; falls back to the raw stills when there are
/// none.
pub async fn render_final(
    renderer: Option<&dyn VideoRenderer>,
    clips: &[String],
    images: &[String],
) -> StepOutcome<String> {
    let Some(renderer) = renderer else {
        tracing::info!("Skipping final render (no API key)");
        return StepOutcome::Skipped {
            reason: "render key missing".to_string(),
        };
    };

    let timeline = if clips.is_empty() {
        RenderTimeline::from_sources(images, AssetKind::Image)
    } else {
        RenderTimeline::from_sources(clips, AssetKind::Video)
    };

    match renderer.submit_render(&timeline).await {
        Ok(render_id) => {
            tracing::info!(%render_id, "Final render submitted");
            StepOutcome::Completed(render_id)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Final render request failed");
            StepOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
