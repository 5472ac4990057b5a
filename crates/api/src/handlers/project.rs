//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use vibeshift_core::error::CoreError;
use vibeshift_core::types::DbId;
use vibeshift_db::models::asset::Asset;
use vibeshift_db::models::project::{CreateProject, Project};
use vibeshift_db::repositories::{AssetRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    pub user_id: String,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects?user_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_user(&state.pool, &params.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/assets
///
/// Assets in timeline order (`order_index` ascending).
pub async fn list_assets(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Asset>>> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let assets = AssetRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(assets))
}
