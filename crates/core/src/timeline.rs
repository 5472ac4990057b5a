//! Fixed-length timeline slots shared by lip-sync, rendering and the studio.

/// Length of every clip slot, in seconds.
pub const CLIP_DURATION_SECS: u32 = 15;

/// Transition applied to every rendered clip.
pub const TRANSITION_FADE_IN: &str = "fadeIn";

/// A half-open `[start, end)` window on the song timeline, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: u32,
    pub end: u32,
}

impl TimeWindow {
    pub fn duration(self) -> u32 {
        self.end - self.start
    }
}

/// Window occupied by the clip at zero-based `index`.
pub fn slot_window(index: usize) -> TimeWindow {
    let start = index as u32 * CLIP_DURATION_SECS;
    TimeWindow {
        start,
        end: start + CLIP_DURATION_SECS,
    }
}

/// Format a playback position as `m:ss`.
///
/// Negative and non-finite inputs clamp to `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
