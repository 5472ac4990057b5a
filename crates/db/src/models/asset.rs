//! Generated asset models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vibeshift_core::asset::AssetKind;
use vibeshift_core::types::{DbId, Timestamp};

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub project_id: DbId,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub asset_type: AssetKind,
    pub url: String,
    pub prompt_used: String,
    pub order_index: i32,
    pub created_at: Timestamp,
}

/// DTO for inserting a generated asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateAsset {
    pub project_id: DbId,
    #[serde(rename = "type")]
    pub asset_type: AssetKind,
    pub url: String,
    pub prompt_used: String,
    pub order_index: i32,
}
