//! Editing state of one studio session.

use vibeshift_core::asset::AssetKind;
use vibeshift_core::status::ProjectStatus;
use vibeshift_core::timeline::slot_window;
use vibeshift_core::types::DbId;

use crate::backend::StudioBackend;
use crate::error::StudioError;
use crate::wire::{AssetRecord, GenerateRequest, GenerateResponse, NewProject};

/// Title of every project the studio creates.
pub const STUDIO_PROJECT_TITLE: &str = "New Music Video";

/// Messages shorter than this are treated as chat, not lyrics.
const LYRICS_MIN_CHARS: usize = 50;

const GREETING: &str = "Hey! I'm your Director AI. Upload your audio and paste your lyrics, \
     then I'll create a stunning music video for you.";
const LYRICS_CAPTURED: &str = "I've captured your lyrics. Click 'Generate Video' when you're \
     ready to create your music video.";
const ACKNOWLEDGED: &str = "Got it! Feel free to share your lyrics or adjust your vision. \
     When ready, hit Generate.";
const STARTING: &str = "Starting video generation... I'll analyze your lyrics, create \
     visuals, and stitch everything together.";

// ---------------------------------------------------------------------------
// Transcript and timeline types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

/// The uploaded song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineClip {
    pub id: DbId,
    pub kind: AssetKind,
    pub url: String,
    pub start_secs: u32,
    pub duration_secs: u32,
}

impl TimelineClip {
    /// Place asset `index` (in `order_index` order) in its 15 second slot.
    fn from_asset(index: usize, asset: &AssetRecord) -> Self {
        let window = slot_window(index);
        Self {
            id: asset.id,
            kind: asset.asset_type,
            url: asset.url.clone(),
            start_secs: window.start,
            duration_secs: window.duration(),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct StudioSession<B> {
    backend: B,
    user_id: Option<String>,
    lyrics: String,
    messages: Vec<ChatMessage>,
    audio: Option<AudioTrack>,
    processing: bool,
    timeline: Vec<TimelineClip>,
    preview_url: Option<String>,
    notifications: Vec<Notification>,
}

impl<B: StudioBackend> StudioSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            user_id: None,
            lyrics: String::new(),
            messages: vec![ChatMessage::assistant(GREETING)],
            audio: None,
            processing: false,
            timeline: Vec::new(),
            preview_url: None,
            notifications: Vec::new(),
        }
    }

    /// Owner recorded on created projects.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn audio(&self) -> Option<&AudioTrack> {
        self.audio.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn timeline(&self) -> &[TimelineClip] {
        &self.timeline
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn upload_audio(&mut self, name: impl Into<String>, url: impl Into<String>) {
        let track = AudioTrack {
            name: name.into(),
            url: url.into(),
        };
        self.messages.push(ChatMessage::assistant(format!(
            "Audio uploaded: \"{}\". Now paste your lyrics and I'll break them into visual scenes.",
            track.name
        )));
        self.audio = Some(track);
        self.notify(NotificationLevel::Success, "Audio uploaded successfully!");
    }

    /// Append a user chat message and the Director's reply.
    ///
    /// A long message arriving while no lyrics are set is taken as the lyrics.
    pub fn send_message(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.messages.push(ChatMessage {
            role: Role::User,
            content: text.to_string(),
        });

        if text.chars().count() > LYRICS_MIN_CHARS && self.lyrics.is_empty() {
            self.lyrics = text.to_string();
            self.messages.push(ChatMessage::assistant(LYRICS_CAPTURED));
        } else {
            self.messages.push(ChatMessage::assistant(ACKNOWLEDGED));
        }
    }

    pub fn set_lyrics(&mut self, text: impl Into<String>) {
        self.lyrics = text.into();
    }

    /// Create a project, run the pipeline on it and load the resulting
    /// assets into the timeline.
    ///
    /// Backend failures are reported in the transcript and as an error
    /// notification, then returned. Nothing is retried.
    pub async fn generate(&mut self) -> Result<GenerateResponse, StudioError> {
        if self.lyrics.trim().is_empty() {
            self.notify(NotificationLevel::Error, "Please add lyrics first");
            return Err(StudioError::MissingLyrics);
        }

        self.processing = true;
        self.messages.push(ChatMessage::assistant(STARTING));

        let result = self.run_generation().await;
        match &result {
            Ok(_) => self.notify(NotificationLevel::Success, "Video generation complete!"),
            Err(e) => {
                tracing::error!(error = %e, "Generation failed");
                self.messages.push(ChatMessage::assistant(format!(
                    "Oops, something went wrong: {e}. Please try again."
                )));
                self.notify(NotificationLevel::Error, "Generation failed");
            }
        }

        self.processing = false;
        result
    }

    async fn run_generation(&mut self) -> Result<GenerateResponse, StudioError> {
        let project = self
            .backend
            .create_project(&NewProject {
                title: STUDIO_PROJECT_TITLE.to_string(),
                lyrics_text: self.lyrics.clone(),
                status: ProjectStatus::Processing,
                user_id: self.user_id.clone(),
            })
            .await?;
        tracing::info!(project_id = %project.id, "Project created");

        let summary = self
            .backend
            .generate(&GenerateRequest {
                project_id: project.id,
                lyrics: self.lyrics.clone(),
                audio_url: self.audio.as_ref().map(|a| a.url.clone()),
            })
            .await?;

        self.messages.push(ChatMessage::assistant(format!(
            "Generation complete! Created {} scenes with {} images. Check the timeline below.",
            summary.scenes, summary.images_generated
        )));

        let mut assets = self.backend.list_assets(project.id).await?;
        assets.sort_by_key(|a| a.order_index);
        if !assets.is_empty() {
            self.timeline = assets
                .iter()
                .enumerate()
                .map(|(idx, asset)| TimelineClip::from_asset(idx, asset))
                .collect();
            self.preview_url = Some(assets[0].url.clone());
        }

        Ok(summary)
    }

    fn notify(&mut self, level: NotificationLevel, text: &str) {
        self.notifications.push(Notification {
            level,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::wire::ProjectRecord;

    const LONG_LYRICS: &str =
        "Neon rain on the boulevard, we were dancing till the morning came around";

    #[derive(Default)]
    struct FakeBackend {
        fail_generate: bool,
        assets: Vec<AssetRecord>,
        created: Mutex<Vec<NewProject>>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl StudioBackend for FakeBackend {
        async fn create_project(&self, project: &NewProject) -> Result<ProjectRecord, StudioError> {
            self.created.lock().unwrap().push(project.clone());
            Ok(ProjectRecord {
                id: Uuid::nil(),
                title: project.title.clone(),
                status: project.status,
            })
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, StudioError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail_generate {
                return Err(StudioError::Api {
                    status: 500,
                    message: "store unavailable".to_string(),
                });
            }
            Ok(GenerateResponse {
                success: true,
                project_id: request.project_id,
                scenes: 4,
                images_generated: 4,
                synced_clips: 0,
                final_video: None,
            })
        }

        async fn list_assets(&self, _project_id: DbId) -> Result<Vec<AssetRecord>, StudioError> {
            Ok(self.assets.clone())
        }
    }

    fn asset(order_index: i32, kind: AssetKind) -> AssetRecord {
        AssetRecord {
            id: Uuid::new_v4(),
            asset_type: kind,
            url: format!("https://cdn.example/{order_index}"),
            order_index,
        }
    }

    fn last_message(session: &StudioSession<FakeBackend>) -> &str {
        &session.messages().last().unwrap().content
    }

    #[test]
    fn new_session_greets_the_user() {
        let session = StudioSession::new(FakeBackend::default());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert!(session.messages()[0].content.contains("Director AI"));
    }

    #[test]
    fn upload_audio_records_track_and_notifies() {
        let mut session = StudioSession::new(FakeBackend::default());
        session.upload_audio("track.mp3", "https://cdn.example/track.mp3");

        assert_eq!(session.audio().unwrap().name, "track.mp3");
        assert!(last_message(&session).contains("\"track.mp3\""));
        assert_eq!(session.notifications()[0].level, NotificationLevel::Success);
    }

    #[test]
    fn blank_message_is_ignored() {
        let mut session = StudioSession::new(FakeBackend::default());
        session.send_message("   ");
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn long_first_message_becomes_lyrics() {
        let mut session = StudioSession::new(FakeBackend::default());
        session.send_message(LONG_LYRICS);

        assert_eq!(session.lyrics(), LONG_LYRICS);
        assert_eq!(session.messages().len(), 3);
        assert!(last_message(&session).starts_with("I've captured your lyrics"));
    }

    #[test]
    fn short_message_or_existing_lyrics_gets_acknowledgement() {
        let mut session = StudioSession::new(FakeBackend::default());
        session.send_message("make it moody");
        assert!(session.lyrics().is_empty());
        assert!(last_message(&session).starts_with("Got it!"));

        session.set_lyrics("already here");
        session.send_message(LONG_LYRICS);
        assert_eq!(session.lyrics(), "already here");
        assert!(last_message(&session).starts_with("Got it!"));
    }

    #[tokio::test]
    async fn generate_without_lyrics_never_calls_backend() {
        let mut session = StudioSession::new(FakeBackend::default());
        session.set_lyrics("  \n ");

        let result = session.generate().await;

        assert_matches!(result, Err(StudioError::MissingLyrics));
        assert!(session.backend().created.lock().unwrap().is_empty());
        assert!(session.backend().requests.lock().unwrap().is_empty());
        assert_eq!(
            session.notifications().last(),
            Some(&Notification {
                level: NotificationLevel::Error,
                text: "Please add lyrics first".to_string(),
            })
        );
        assert!(!session.is_processing());
    }

    #[tokio::test]
    async fn generate_builds_timeline_in_order_index_order() {
        let backend = FakeBackend {
            assets: vec![
                asset(100, AssetKind::Video),
                asset(1, AssetKind::Image),
                asset(0, AssetKind::Image),
            ],
            ..FakeBackend::default()
        };
        let mut session = StudioSession::new(backend).with_user("user-7");
        session.upload_audio("song.wav", "https://cdn.example/song.wav");
        session.set_lyrics(LONG_LYRICS);

        let summary = session.generate().await.unwrap();

        assert_eq!(summary.scenes, 4);
        let created = session.backend().created.lock().unwrap().clone();
        assert_eq!(created[0].title, STUDIO_PROJECT_TITLE);
        assert_eq!(created[0].status, ProjectStatus::Processing);
        assert_eq!(created[0].user_id.as_deref(), Some("user-7"));
        let requests = session.backend().requests.lock().unwrap().clone();
        assert_eq!(
            requests[0].audio_url.as_deref(),
            Some("https://cdn.example/song.wav")
        );

        let starts: Vec<u32> = session.timeline().iter().map(|c| c.start_secs).collect();
        assert_eq!(starts, vec![0, 15, 30]);
        assert!(session.timeline().iter().all(|c| c.duration_secs == 15));
        assert_eq!(session.timeline()[2].kind, AssetKind::Video);
        assert_eq!(session.preview_url(), Some("https://cdn.example/0"));
        assert!(session
            .messages()
            .iter()
            .any(|m| m.content.starts_with("Generation complete! Created 4 scenes with 4 images")));
        assert_eq!(
            session.notifications().last().unwrap().level,
            NotificationLevel::Success
        );
        assert!(!session.is_processing());
    }

    #[tokio::test]
    async fn generate_with_no_assets_keeps_timeline_empty() {
        let mut session = StudioSession::new(FakeBackend::default());
        session.set_lyrics(LONG_LYRICS);

        session.generate().await.unwrap();

        assert!(session.timeline().is_empty());
        assert_eq!(session.preview_url(), None);
    }

    #[tokio::test]
    async fn backend_failure_is_reported_in_transcript() {
        let backend = FakeBackend {
            fail_generate: true,
            ..FakeBackend::default()
        };
        let mut session = StudioSession::new(backend);
        session.set_lyrics(LONG_LYRICS);

        let result = session.generate().await;

        assert_matches!(result, Err(StudioError::Api { status: 500, .. }));
        assert_eq!(
            last_message(&session),
            "Oops, something went wrong: store unavailable. Please try again."
        );
        assert_eq!(
            session.notifications().last().unwrap().text,
            "Generation failed"
        );
        assert_eq!(session.backend().requests.lock().unwrap().len(), 1);
        assert!(!session.is_processing());
    }
}
