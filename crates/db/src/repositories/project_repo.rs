//! Repository for the `projects` table.

use sqlx::PgPool;
use vibeshift_core::status::ProjectStatus;
use vibeshift_core::types::DbId;

use crate::models::project::{CreateProject, Project, DEFAULT_PROJECT_TITLE};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, lyrics_text, status, user_id, created_at, updated_at";

/// Provides CRUD operations for projects. Projects are never deleted here.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, lyrics_text, status, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let title = input.title.as_deref().unwrap_or(DEFAULT_PROJECT_TITLE);
        let status = input.status.unwrap_or(ProjectStatus::Created);
        sqlx::query_as::<_, Project>(&query)
            .bind(title)
            .bind(&input.lyrics_text)
            .bind(status.as_str())
            .bind(&input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects, most recently created first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set the lifecycle status. Returns `None` if no row with `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
