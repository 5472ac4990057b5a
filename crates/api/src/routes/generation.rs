use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Routes mounted at `/generate`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(generation::generate))
}
