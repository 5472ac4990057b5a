use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vibeshift_core::error::CoreError;
use vibeshift_pipeline::PipelineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and sqlx errors from the repositories.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vibeshift_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (PostgreSQL `23503`) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => (
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            "Referenced resource does not exist".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Generation endpoint
// ---------------------------------------------------------------------------

/// Failure body of the generation endpoint: `{ "success": false, "error" }`.
///
/// Kept separate from [`AppError`] because pipeline callers read `success`
/// rather than `code`.
#[derive(Debug)]
pub struct GenerationFailure {
    pub status: StatusCode,
    pub message: String,
}

impl From<JsonRejection> for GenerationFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<PipelineError> for GenerationFailure {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::ProjectNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            PipelineError::Store(_) | PipelineError::Setup(_) => {
                tracing::error!(error = %err, "Generation aborted");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Generation failed: could not update project".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for GenerationFailure {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": self.message,
        });
        (self.status, axum::Json(body)).into_response()
    }
}
