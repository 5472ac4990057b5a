//! Asset kinds, ordering sentinels and the pending-render URL format.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Asset kinds
// ---------------------------------------------------------------------------

pub const ASSET_IMAGE: &str = "image";
pub const ASSET_VIDEO: &str = "video";
pub const ASSET_AUDIO: &str = "audio";

/// Kind of a generated artifact, stored in `assets.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
    Audio,
}

impl AssetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => ASSET_IMAGE,
            Self::Video => ASSET_VIDEO,
            Self::Audio => ASSET_AUDIO,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            ASSET_IMAGE => Ok(Self::Image),
            ASSET_VIDEO => Ok(Self::Video),
            ASSET_AUDIO => Ok(Self::Audio),
            other => Err(CoreError::Validation(format!(
                "Unknown asset type '{other}'. Must be one of: image, video, audio"
            ))),
        }
    }
}

/// Decodes the `assets.type` column.
impl TryFrom<String> for AssetKind {
    type Error = CoreError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Order index of the stitched final video. Sorts after every scene image.
pub const FINAL_VIDEO_ORDER_INDEX: i32 = 100;

/// `prompt_used` recorded on the stitched final video asset.
pub const FINAL_VIDEO_PROMPT: &str = "Final stitched video";

// ---------------------------------------------------------------------------
// Pending render sentinel
// ---------------------------------------------------------------------------

/// URL prefix marking a video whose render has been submitted but not resolved.
pub const PENDING_RENDER_PREFIX: &str = "pending:";

/// Build the sentinel URL for a submitted render job.
pub fn pending_render_url(render_id: &str) -> String {
    format!("{PENDING_RENDER_PREFIX}{render_id}")
}

// ---------------------------------------------------------------------------
// Placeholder images
// ---------------------------------------------------------------------------

/// Placeholder still used when image generation fails for a scene.
///
/// Keyed by scene number; `nonce` (usually wall-clock millis) keeps two runs
/// from hitting the same cached image.
pub fn placeholder_image_url(scene_number: u32, nonce: i64) -> String {
    format!("https://picsum.photos/seed/{scene_number}-{nonce}/1920/1080")
}
