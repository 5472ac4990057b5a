//! VibeShift studio client.
//!
//! [`StudioSession`] holds the editing state (lyrics, chat transcript,
//! timeline) and drives a generation through a [`StudioBackend`].
//! [`HttpBackend`] talks to the `vibeshift-api` server.

pub mod backend;
pub mod error;
pub mod session;
pub mod wire;

pub use backend::{HttpBackend, StudioBackend};
pub use error::StudioError;
pub use session::{AudioTrack, ChatMessage, Notification, NotificationLevel, Role, StudioSession, TimelineClip};
pub use vibeshift_core::timeline::format_time;
