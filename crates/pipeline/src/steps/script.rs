use vibeshift_core::scene::{director_prompt, fallback_scenes, parse_scene_script, Scene};
use vibeshift_providers::TextGenerator;

use crate::outcome::StepOutcome;

/// Step 1: turn lyrics into a four-scene script.
///
/// Always yields exactly four scenes; any failure substitutes the built-in
/// fallback script. No retry.
pub async fn script_scenes(text: Option<&dyn TextGenerator>, lyrics: &str) -> StepOutcome<Vec<Scene>> {
    let Some(text) = text else {
        tracing::info!("No language model configured, using fallback scenes");
        return fallback("no language model configured".to_string());
    };

    let output = match text.generate_text(&director_prompt(lyrics)).await {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(error = %e, "Scene scripting request failed, using fallback scenes");
            return fallback(e.to_string());
        }
    };

    match parse_scene_script(&output) {
        Ok(scenes) => {
            tracing::debug!(count = scenes.len(), "Parsed scene script");
            StepOutcome::Completed(scenes)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not parse scene script, using fallback scenes");
            fallback(e.to_string())
        }
    }
}

fn fallback(reason: String) -> StepOutcome<Vec<Scene>> {
    StepOutcome::Degraded {
        value: fallback_scenes(),
        reason,
    }
}
