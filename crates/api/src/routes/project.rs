use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                 list (?user_id=)
/// POST   /                 create
/// GET    /{id}             get_by_id
/// GET    /{id}/assets      list_assets
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/assets", get(project::list_assets))
}
