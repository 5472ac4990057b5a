use serde::{Deserialize, Serialize};
use vibeshift_core::types::DbId;

/// Input to one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub project_id: DbId,
    pub lyrics: String,
    /// Audio track for lip-sync. Absent or empty skips that step.
    #[serde(default)]
    pub audio_url: Option<String>,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub success: bool,
    pub project_id: DbId,
    pub scenes: usize,
    pub images_generated: usize,
    pub synced_clips: usize,
    /// `pending:<render-id>` when a render was submitted.
    pub final_video: Option<String>,
}
