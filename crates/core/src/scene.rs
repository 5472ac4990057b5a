//! Scene script model, director prompt, and tolerant parsing of language
//! model output.
//!
//! A scene script is always exactly [`SCENE_COUNT`] scenes. Anything the
//! model returns that cannot be turned into that many scenes is rejected
//! here so the caller can substitute [`fallback_scenes`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::timeline::CLIP_DURATION_SECS;

/// Number of scenes in every script.
pub const SCENE_COUNT: usize = 4;

/// Mood used when the model omits one.
pub const DEFAULT_MOOD: &str = "cinematic";

/// Qualifiers appended to every image prompt.
pub const IMAGE_PROMPT_QUALIFIERS: &str = "cinematic 4K, professional music video still";

/// First `{` through last `}`, spanning newlines.
static JSON_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// One director-authored visual segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based position in the script.
    pub scene_number: u32,
    pub visual_prompt: String,
    pub mood: String,
    pub duration_seconds: u32,
}

impl Scene {
    fn new(scene_number: u32, visual_prompt: &str, mood: &str) -> Self {
        Self {
            scene_number,
            visual_prompt: visual_prompt.to_string(),
            mood: mood.to_string(),
            duration_seconds: CLIP_DURATION_SECS,
        }
    }
}

/// The built-in script used whenever scene scripting fails.
pub fn fallback_scenes() -> Vec<Scene> {
    vec![
        Scene::new(
            1,
            "Cinematic opening shot, neon lights reflecting on wet streets at night",
            "mysterious",
        ),
        Scene::new(
            2,
            "Close-up portrait shot with dramatic lighting, silhouette against colorful backdrop",
            "intense",
        ),
        Scene::new(
            3,
            "Wide landscape shot, golden hour lighting, ethereal atmosphere",
            "hopeful",
        ),
        Scene::new(
            4,
            "Abstract visual finale, particles and light trails, cosmic energy",
            "triumphant",
        ),
    ]
}

/// Instruction sent to the language model for a set of lyrics.
pub fn director_prompt(lyrics: &str) -> String {
    format!(
        r#"You are a music video director. Analyze these song lyrics and create exactly {SCENE_COUNT} visual scene descriptions for a music video.

LYRICS:
{lyrics}

Return ONLY valid JSON in this exact format, no markdown:
{{
  "scenes": [
    {{
      "scene_number": 1,
      "visual_prompt": "A detailed visual description for AI image generation, cinematic style",
      "mood": "emotional tone",
      "duration_seconds": {CLIP_DURATION_SECS}
    }}
  ]
}}

Make each visual_prompt vivid, cinematic, and suitable for AI image generation. Include lighting, colors, camera angles."#
    )
}

/// Prompt sent to the image model for one scene.
pub fn image_prompt(scene: &Scene) -> String {
    format!(
        "{}, {IMAGE_PROMPT_QUALIFIERS}, {} mood",
        scene.visual_prompt, scene.mood
    )
}

/// Return the first JSON object embedded in free text, if any.
///
/// Greedy: spans from the first `{` to the last `}` so that markdown fences
/// and surrounding commentary are dropped but nested objects survive.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(text).map(|m| m.as_str())
}

#[derive(Debug, Deserialize)]
struct RawScript {
    #[serde(default)]
    scenes: Vec<RawScene>,
}

#[derive(Debug, Deserialize)]
struct RawScene {
    visual_prompt: String,
    #[serde(default)]
    mood: Option<String>,
    #[serde(default)]
    duration_seconds: Option<u32>,
}

/// Parse language model output into a scene script.
///
/// Scenes are renumbered by position. Fails unless exactly
/// [`SCENE_COUNT`] scenes with non-empty prompts are present.
pub fn parse_scene_script(text: &str) -> Result<Vec<Scene>, CoreError> {
    let json = extract_json_object(text)
        .ok_or_else(|| CoreError::Validation("No JSON object in model output".into()))?;

    let raw: RawScript = serde_json::from_str(json)
        .map_err(|e| CoreError::Validation(format!("Malformed scene script: {e}")))?;

    if raw.scenes.len() != SCENE_COUNT {
        return Err(CoreError::Validation(format!(
            "Expected {SCENE_COUNT} scenes, got {}",
            raw.scenes.len()
        )));
    }

    (1_u32..)
        .zip(raw.scenes)
        .map(|(scene_number, raw)| {
            let visual_prompt = raw.visual_prompt.trim().to_string();
            if visual_prompt.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Scene {scene_number} has an empty visual_prompt"
                )));
            }
            let mood = raw
                .mood
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MOOD.to_string());
            Ok(Scene {
                scene_number,
                visual_prompt,
                mood,
                duration_seconds: raw
                    .duration_seconds
                    .filter(|d| *d > 0)
                    .unwrap_or(CLIP_DURATION_SECS),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
