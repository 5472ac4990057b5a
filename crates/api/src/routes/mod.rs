pub mod generation;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate                      run the generation pipeline (POST)
///
/// /projects                      list (?user_id=), create
/// /projects/{id}                 get
/// /projects/{id}/assets          list assets in timeline order
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/generate", generation::router())
        .nest("/projects", project::router())
}
