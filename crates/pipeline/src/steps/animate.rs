use vibeshift_providers::{LipSyncRequest, LipSyncer};

use crate::outcome::StepOutcome;

/// Step 3: lip-sync every still against the audio track in one batch.
///
/// Runs only when a lip-sync provider and a non-empty audio reference are
/// both present.
pub async fn animate(
    lip_sync: Option<&dyn LipSyncer>,
    images: &[String],
    audio_url: Option<&str>,
) -> StepOutcome<Vec<String>> {
    let audio_url = audio_url.map(str::trim).filter(|a| !a.is_empty());
    let (Some(lip_sync), Some(audio_url)) = (lip_sync, audio_url) else {
        tracing::info!("Skipping lip-sync (no API key or audio URL)");
        return StepOutcome::Skipped {
            reason: "lip-sync key or audio reference missing".to_string(),
        };
    };

    let request = LipSyncRequest::from_images(images, audio_url);
    match lip_sync.lip_sync(&request).await {
        Ok(clips) => {
            tracing::info!(clips = clips.len(), "Lip-sync produced clips");
            StepOutcome::Completed(clips)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Lip-sync request failed, using static images");
            StepOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
