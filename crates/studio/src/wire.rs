//! JSON bodies exchanged with the API server.

use serde::{Deserialize, Serialize};
use vibeshift_core::asset::AssetKind;
use vibeshift_core::status::ProjectStatus;
use vibeshift_core::types::DbId;

/// Body of `POST /api/v1/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub lyrics_text: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: DbId,
    pub title: String,
    pub status: ProjectStatus,
}

/// Body of `POST /api/v1/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub project_id: DbId,
    pub lyrics: String,
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub project_id: DbId,
    pub scenes: usize,
    pub images_generated: usize,
    pub synced_clips: usize,
    pub final_video: Option<String>,
}

/// One row of `GET /api/v1/projects/{id}/assets`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRecord {
    pub id: DbId,
    #[serde(rename = "type")]
    pub asset_type: AssetKind,
    pub url: String,
    pub order_index: i32,
}
