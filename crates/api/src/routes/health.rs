use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vibeshift_pipeline::ProviderAvailability;

use crate::state::AppState;

/// `GET /health` body.
///
/// `status` tracks the database only. A missing provider key just means that
/// pipeline step is skipped, so it shows up under `providers` instead.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub providers: ProviderAvailability,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = vibeshift_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        providers: state.pipeline.availability(),
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
