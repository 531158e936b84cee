//! Utility functions for formatting.
//!
//! Duration labels and file-name extraction used by the report layer.

use std::path::Path;

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// A millisecond count split into hours, minutes, seconds and milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl DurationBreakdown {
    #[must_use]
    pub fn from_ms(ms: u64) -> Self {
        Self {
            hours: ms / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
            milliseconds: ms % MS_PER_SECOND,
        }
    }

    /// Recombines the parts into a millisecond count.
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
            + self.milliseconds
    }
}

/// Formats milliseconds as a compact label (e.g., 3500 -> "3s500ms").
///
/// Leading zero units are omitted, but once a larger unit is shown every
/// smaller unit down to seconds is shown too. Milliseconds appear only when
/// non-zero. Zero is rendered as "0ms".
#[must_use]
pub fn format_duration_ms(ms: u64) -> String {
    if ms == 0 {
        return "0ms".to_string();
    }

    let parts = DurationBreakdown::from_ms(ms);
    let mut label = String::new();

    if parts.hours > 0 {
        label.push_str(&format!("{}h", parts.hours));
    }
    if parts.hours > 0 || parts.minutes > 0 {
        label.push_str(&format!("{}m", parts.minutes));
    }
    if parts.hours > 0 || parts.minutes > 0 || parts.seconds > 0 {
        label.push_str(&format!("{}s", parts.seconds));
    }
    if parts.milliseconds > 0 {
        label.push_str(&format!("{}ms", parts.milliseconds));
    }
    label
}

/// Returns the final component of `path` for display, or the whole path if
/// it has none.
#[must_use]
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
