//! Per-step result type.
//!
//! Every pipeline step ends in one of these instead of an error, which keeps
//! "a provider failed but the run continues" visible in the types.

/// How a single pipeline step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    /// The provider produced the value.
    Completed(T),
    /// The provider failed (partly or fully) and a fallback value stands in.
    Degraded { value: T, reason: String },
    /// A prerequisite (key, audio) was missing, so the step never ran.
    Skipped { reason: String },
    /// The provider failed and there is no fallback value.
    Failed { reason: String },
}

impl<T> StepOutcome<T> {
    /// The value produced, whether real or fallback.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Completed(value) | Self::Degraded { value, .. } => Some(value),
            Self::Skipped { .. } | Self::Failed { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Completed(value) | Self::Degraded { value, .. } => Some(value),
            Self::Skipped { .. } | Self::Failed { .. } => None,
        }
    }

    /// Why the step did not fully complete, if it didn't.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Completed(_) => None,
            Self::Degraded { reason, .. } | Self::Skipped { reason } | Self::Failed { reason } => {
                Some(reason)
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed(_) => "completed",
            Self::Degraded { .. } => "degraded",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}
