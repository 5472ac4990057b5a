//! Project lifecycle status.
//!
//! Stored as `TEXT` in the `projects.status` column (guarded by a `CHECK`
//! constraint); this module owns the string mapping.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Project status name: freshly created, not yet picked up.
pub const STATUS_CREATED: &str = "created";
/// Project status name: the generation pipeline is running.
pub const STATUS_PROCESSING: &str = "processing";
/// Project status name: a render job was submitted and is pending.
pub const STATUS_RENDERING: &str = "rendering";
/// Project status name: generation finished without a pending render.
pub const STATUS_COMPLETED: &str = "completed";
/// Project status name: generation aborted.
pub const STATUS_FAILED: &str = "failed";

/// All valid project status names.
pub const VALID_PROJECT_STATUSES: &[&str] = &[
    STATUS_CREATED,
    STATUS_PROCESSING,
    STATUS_RENDERING,
    STATUS_COMPLETED,
    STATUS_FAILED,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Created,
    Processing,
    Rendering,
    Completed,
    Failed,
}

impl ProjectStatus {
    /// Database / wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => STATUS_CREATED,
            Self::Processing => STATUS_PROCESSING,
            Self::Rendering => STATUS_RENDERING,
            Self::Completed => STATUS_COMPLETED,
            Self::Failed => STATUS_FAILED,
        }
    }

    /// Parse from the database `status` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            STATUS_CREATED => Ok(Self::Created),
            STATUS_PROCESSING => Ok(Self::Processing),
            STATUS_RENDERING => Ok(Self::Rendering),
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_FAILED => Ok(Self::Failed),
            other => Err(CoreError::Validation(format!(
                "Invalid project status '{other}'. Must be one of: {}",
                VALID_PROJECT_STATUSES.join(", ")
            ))),
        }
    }

    /// Status a finished pipeline run leaves the project in.
    ///
    /// A submitted render keeps the project in `rendering` until the render
    /// is resolved out-of-band.
    pub fn after_generation(has_pending_render: bool) -> Self {
        if has_pending_render {
            Self::Rendering
        } else {
            Self::Completed
        }
    }
}

/// Decodes the `projects.status` column.
impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
