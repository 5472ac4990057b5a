use vibeshift_core::types::DbId;

/// Errors from the project/asset store seam.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Backend(String),
}

/// Failures that abort a generation run.
///
/// Provider failures never appear here; each step absorbs them into a
/// [`crate::StepOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Project {0} not found")]
    ProjectNotFound(DbId),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Provider setup failed: {0}")]
    Setup(#[from] vibeshift_providers::ProviderError),
}
