use futures::future::join_all;
use vibeshift_core::asset::placeholder_image_url;
use vibeshift_core::scene::{image_prompt, Scene};
use vibeshift_providers::ImageGenerator;

use crate::outcome::StepOutcome;

/// Generate one still for a scene, or a placeholder URL if that fails.
pub async fn scene_image(image: Option<&dyn ImageGenerator>, scene: &Scene) -> StepOutcome<String> {
    let result = match image {
        Some(image) => image
            .generate_image(&image_prompt(scene))
            .await
            .map_err(|e| e.to_string()),
        None => Err("no image model configured".to_string()),
    };

    match result {
        Ok(generated) => {
            tracing::debug!(scene_number = scene.scene_number, "Generated scene image");
            StepOutcome::Completed(generated.into_url())
        }
        Err(reason) => {
            tracing::warn!(
                scene_number = scene.scene_number,
                error = %reason,
                "Image generation failed, using placeholder"
            );
            StepOutcome::Degraded {
                value: placeholder_image_url(
                    scene.scene_number,
                    chrono::Utc::now().timestamp_millis(),
                ),
                reason,
            }
        }
    }
}

/// Step 2: one image per scene, in scene order.
///
/// The result always has one URL per scene. It is `Degraded` when at least
/// one scene fell back to a placeholder. With `parallel` set the requests are
/// issued together and joined; otherwise they run one after another.
pub async fn generate_images(
    image: Option<&dyn ImageGenerator>,
    scenes: &[Scene],
    parallel: bool,
) -> StepOutcome<Vec<String>> {
    let slots: Vec<StepOutcome<String>> = if parallel {
        join_all(scenes.iter().map(|scene| scene_image(image, scene))).await
    } else {
        let mut slots = Vec::with_capacity(scenes.len());
        for scene in scenes {
            slots.push(scene_image(image, scene).await);
        }
        slots
    };

    let placeholders = slots.iter().filter(|s| !s.is_completed()).count();
    let urls: Vec<String> = slots.into_iter().filter_map(StepOutcome::into_value).collect();

    if placeholders == 0 {
        StepOutcome::Completed(urls)
    } else {
        StepOutcome::Degraded {
            value: urls,
            reason: format!("{placeholders} of {} scenes used placeholders", scenes.len()),
        }
    }
}
