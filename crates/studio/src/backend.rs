use async_trait::async_trait;
use serde::Deserialize;
use vibeshift_core::types::DbId;

use crate::error::StudioError;
use crate::wire::{AssetRecord, GenerateRequest, GenerateResponse, NewProject, ProjectRecord};

/// What the studio needs from the server side.
#[async_trait]
pub trait StudioBackend: Send + Sync {
    async fn create_project(&self, project: &NewProject) -> Result<ProjectRecord, StudioError>;

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, StudioError>;

    /// Assets of a project ordered by `order_index`.
    async fn list_assets(&self, project_id: DbId) -> Result<Vec<AssetRecord>, StudioError>;
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// [`StudioBackend`] over the `vibeshift-api` REST routes.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }
}

#[async_trait]
impl StudioBackend for HttpBackend {
    async fn create_project(&self, project: &NewProject) -> Result<ProjectRecord, StudioError> {
        let response = self
            .client
            .post(self.url("/projects"))
            .json(project)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, StudioError> {
        let response = self
            .client
            .post(self.url("/generate"))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn list_assets(&self, project_id: DbId) -> Result<Vec<AssetRecord>, StudioError> {
        let response = self
            .client
            .get(self.url(&format!("/projects/{project_id}/assets")))
            .send()
            .await?;
        parse_response(response).await
    }
}

/// Either error body the API produces: `{error, code}` or `{success, error}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Parse a JSON body, turning a non-success status into
/// [`StudioError::Api`] carrying the server's `error` message (or the raw
/// body when it is not JSON).
async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, StudioError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(StudioError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(response.json::<T>().await?)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_error_field() {
        assert_eq!(
            error_message(r#"{"success":false,"error":"Project x not found"}"#),
            "Project x not found"
        );
        assert_eq!(
            error_message(r#"{"error":"Resource not found","code":"NOT_FOUND"}"#),
            "Resource not found"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let backend = HttpBackend::new(reqwest::Client::new(), "http://localhost:3000/");
        assert_eq!(backend.url("/generate"), "http://localhost:3000/api/v1/generate");
    }
}
