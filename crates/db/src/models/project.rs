//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vibeshift_core::status::ProjectStatus;
use vibeshift_core::types::{DbId, Timestamp};

/// Title given to projects created without one.
pub const DEFAULT_PROJECT_TITLE: &str = "New Music Video";

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub lyrics_text: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub user_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    /// Defaults to [`DEFAULT_PROJECT_TITLE`] if omitted.
    pub title: Option<String>,
    pub lyrics_text: String,
    /// Defaults to `created` if omitted.
    pub status: Option<ProjectStatus>,
    pub user_id: Option<String>,
}
