use std::sync::Arc;

use vibeshift_pipeline::GenerationPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vibeshift_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Generation pipeline wired to the provider clients and the store.
    pub pipeline: Arc<GenerationPipeline>,
}
