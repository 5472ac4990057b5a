//! Repository for the `assets` table.

use sqlx::PgPool;
use vibeshift_core::asset::{pending_render_url, ASSET_VIDEO};
use vibeshift_core::types::DbId;

use crate::models::asset::{Asset, CreateAsset};

const COLUMNS: &str = "id, project_id, type, url, prompt_used, order_index, created_at";

/// Provides insert and read operations for generated assets.
///
/// Assets are immutable once written; the one exception is
/// [`AssetRepo::resolve_pending_render`].
pub struct AssetRepo;

impl AssetRepo {
    /// Insert an asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (project_id, type, url, prompt_used, order_index)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(input.project_id)
            .bind(input.asset_type.as_str())
            .bind(&input.url)
            .bind(&input.prompt_used)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// List a project's assets in timeline order.
    ///
    /// Ties on `order_index` (duplicate generation runs) fall back to
    /// insertion time.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets WHERE project_id = $1
             ORDER BY order_index ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the `pending:<render_id>` URL of a project's video asset with
    /// the finished render URL.
    ///
    /// Returns `None` if no pending video for that render exists.
    pub async fn resolve_pending_render(
        pool: &PgPool,
        project_id: DbId,
        render_id: &str,
        url: &str,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET url = $4
             WHERE project_id = $1 AND type = $2 AND url = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(project_id)
            .bind(ASSET_VIDEO)
            .bind(pending_render_url(render_id))
            .bind(url)
            .fetch_optional(pool)
            .await
    }
}
