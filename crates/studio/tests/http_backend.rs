//! Drives [`HttpBackend`] against an in-process axum server standing in for
//! `vibeshift-api`.

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;
use vibeshift_core::asset::AssetKind;
use vibeshift_core::status::ProjectStatus;
use vibeshift_studio::wire::{GenerateRequest, NewProject};
use vibeshift_studio::{HttpBackend, StudioBackend, StudioError, StudioSession};

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn project_id() -> Uuid {
    Uuid::from_u128(0x5eed)
}

async fn create_project(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "id": project_id(),
            "title": body["title"],
            "lyrics_text": body["lyrics_text"],
            "status": body["status"],
            "user_id": body["user_id"],
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        })),
    )
}

async fn generate(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["lyrics"] == "missing project" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "error": "Project not found"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "project_id": body["project_id"],
            "scenes": 4,
            "images_generated": 4,
            "synced_clips": 0,
            "final_video": "pending:render-1"
        })),
    )
}

async fn list_assets(Path(id): Path<Uuid>) -> Json<Value> {
    Json(json!([
        {"id": Uuid::new_v4(), "project_id": id, "type": "image", "url": "https://img.example/0.png",
         "prompt_used": "a", "order_index": 0, "created_at": "2026-01-01T00:00:00Z"},
        {"id": Uuid::new_v4(), "project_id": id, "type": "video", "url": "pending:render-1",
         "prompt_used": "Final stitched video", "order_index": 100, "created_at": "2026-01-01T00:00:00Z"}
    ]))
}

fn fake_api() -> Router {
    Router::new()
        .route("/api/v1/projects", post(create_project))
        .route("/api/v1/generate", post(generate))
        .route("/api/v1/projects/{id}/assets", get(list_assets))
}

#[tokio::test]
async fn backend_speaks_the_api_wire_format() {
    let base = spawn(fake_api()).await;
    let backend = HttpBackend::new(reqwest::Client::new(), &base);

    let project = backend
        .create_project(&NewProject {
            title: "New Music Video".to_string(),
            lyrics_text: "la la".to_string(),
            status: ProjectStatus::Processing,
            user_id: None,
        })
        .await
        .unwrap();
    assert_eq!(project.id, project_id());
    assert_eq!(project.status, ProjectStatus::Processing);

    let summary = backend
        .generate(&GenerateRequest {
            project_id: project.id,
            lyrics: "la la".to_string(),
            audio_url: None,
        })
        .await
        .unwrap();
    assert_eq!(summary.final_video.as_deref(), Some("pending:render-1"));

    let assets = backend.list_assets(project.id).await.unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[1].asset_type, AssetKind::Video);
}

#[tokio::test]
async fn api_error_body_becomes_studio_error() {
    let base = spawn(fake_api()).await;
    let backend = HttpBackend::new(reqwest::Client::new(), &base);

    let err = backend
        .generate(&GenerateRequest {
            project_id: project_id(),
            lyrics: "missing project".to_string(),
            audio_url: None,
        })
        .await
        .unwrap_err();

    assert_matches!(err, StudioError::Api { status: 404, ref message } if message == "Project not found");
}

#[tokio::test]
async fn session_runs_end_to_end_over_http() {
    let base = spawn(fake_api()).await;
    let mut session = StudioSession::new(HttpBackend::new(reqwest::Client::new(), &base));
    session.set_lyrics("We ride at dawn");

    let summary = session.generate().await.unwrap();

    assert_eq!(summary.images_generated, 4);
    assert_eq!(session.timeline().len(), 2);
    assert_eq!(session.timeline()[1].start_secs, 15);
    assert_eq!(session.preview_url(), Some("https://img.example/0.png"));
}
