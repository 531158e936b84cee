use std::fmt;
use std::path::PathBuf;

use crate::error::CoreResult;
use crate::utils::format_duration_ms;

/// Outcome category of a single verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every audio track is within tolerance of the primary video track.
    Passed,
    /// At least one audio track deviates more than the tolerance allows.
    ToleranceExceeded,
    /// The file has no audio tracks.
    NoAudioTracks,
    /// The file has audio tracks but no countable video track to compare with.
    NoVideoTracks,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "passed"),
            Verdict::ToleranceExceeded => write!(f, "tolerance exceeded"),
            Verdict::NoAudioTracks => write!(f, "no audio tracks found"),
            Verdict::NoVideoTracks => write!(f, "no video tracks found"),
        }
    }
}

/// Result of verifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub verdict: Verdict,
    pub video_tracks: usize,
    pub audio_tracks: usize,
    /// Largest audio vs primary video deviation; 0 when it could not be computed.
    pub max_deviation_ms: u64,
    /// Tolerance the verdict was computed against.
    pub tolerance_ms: u64,
}

impl VerificationResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }

    /// Track-count label, e.g. `"1+1 track:  "` or `"1+2 tracks: "`.
    #[must_use]
    pub fn track_label(&self) -> String {
        track_label(self.video_tracks, self.audio_tracks)
    }

    /// Deviation rendered as a duration label, e.g. `"3s500ms"`.
    #[must_use]
    pub fn deviation_label(&self) -> String {
        format_duration_ms(self.max_deviation_ms)
    }
}

/// Formats the `{video}+{audio} track(s)` label.
///
/// Plural when the audio count is zero or more than one. The singular form
/// ends in two spaces and the plural form in one, so file names line up.
#[must_use]
pub fn track_label(video_tracks: usize, audio_tracks: usize) -> String {
    let suffix = if audio_tracks == 1 { ":  " } else { "s: " };
    format!("{video_tracks}+{audio_tracks} track{suffix}")
}

/// Verification outcome for one input path.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: CoreResult<VerificationResult>,
}

impl FileReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome.as_ref().is_ok_and(VerificationResult::passed)
    }
}

/// Ordered per-file outcomes of a batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<FileReport>,
}

impl BatchOutcome {
    /// True only if every file passed. An empty batch passes.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(FileReport::passed)
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.passed()).count()
    }
}
