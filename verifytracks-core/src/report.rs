//! Report lines for verification outcomes.
//!
//! Formatting is pure: a [`ReportLine`] carries plain text segments and a
//! semantic [`Tone`], and the presentation layer decides how to render them
//! (colours on a terminal, plain text in logs).

use std::fmt;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::utils::display_file_name;
use crate::verification::{FileReport, VerificationResult, Verdict};

/// Semantic classification of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The file passed.
    Pass,
    /// The file was verified and failed.
    Fail,
    /// The file could not be verified at all.
    Warn,
}

/// Trailing explanation of a failed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Deviation label, rendered as `difference: {label}`.
    Difference(String),
    /// A problem description such as `NO AUDIO TRACKS FOUND`.
    Problem(String),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Difference(label) => write!(f, "difference: {label}"),
            Detail::Problem(text) => f.write_str(text),
        }
    }
}

/// One line of the per-file report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub tone: Tone,
    /// Track-count label; empty when the file could not be probed.
    pub tracks: String,
    pub file_name: String,
    pub detail: Option<Detail>,
}

impl ReportLine {
    /// `"PASSED: "` or `"FAILED: "`.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self.tone {
            Tone::Pass => "PASSED: ",
            Tone::Fail | Tone::Warn => "FAILED: ",
        }
    }

    /// The line without any styling.
    #[must_use]
    pub fn plain(&self) -> String {
        let mut line = format!("{}{}{}", self.status(), self.tracks, self.file_name);
        if let Some(detail) = &self.detail {
            line.push_str(&format!(" ({detail}) "));
        }
        line
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

/// Builds the report line for one file's outcome.
#[must_use]
pub fn report_line(path: &Path, outcome: &CoreResult<VerificationResult>) -> ReportLine {
    let file_name = display_file_name(path);
    match outcome {
        Ok(result) => verified_line(file_name, result),
        Err(error) => probe_error_line(file_name, error),
    }
}

/// Builds report lines for every file of a batch, in order.
#[must_use]
pub fn report_lines(reports: &[FileReport]) -> Vec<ReportLine> {
    reports
        .iter()
        .map(|report| report_line(&report.path, &report.outcome))
        .collect()
}

fn verified_line(file_name: String, result: &VerificationResult) -> ReportLine {
    let (tone, detail) = match result.verdict {
        Verdict::Passed => (Tone::Pass, None),
        Verdict::ToleranceExceeded => (
            Tone::Fail,
            Some(Detail::Difference(result.deviation_label())),
        ),
        // Same layout as every other line, as the original verifytracks prints it.
        Verdict::NoAudioTracks => (
            Tone::Fail,
            Some(Detail::Problem("NO AUDIO TRACKS FOUND".to_string())),
        ),
        Verdict::NoVideoTracks => (
            Tone::Fail,
            Some(Detail::Problem("NO VIDEO TRACKS FOUND".to_string())),
        ),
    };

    ReportLine {
        tone,
        tracks: result.track_label(),
        file_name,
        detail,
    }
}

fn probe_error_line(file_name: String, error: &CoreError) -> ReportLine {
    ReportLine {
        tone: Tone::Warn,
        tracks: String::new(),
        file_name,
        detail: Some(Detail::Problem(format!("probe failed: {error}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(verdict: Verdict, video: usize, audio: usize, deviation: u64) -> VerificationResult {
        VerificationResult {
            verdict,
            video_tracks: video,
            audio_tracks: audio,
            max_deviation_ms: deviation,
            tolerance_ms: 2000,
        }
    }

    #[test]
    fn test_pass_line() {
        let line = report_line(
            Path::new("/media/show/episode.mkv"),
            &Ok(result(Verdict::Passed, 1, 1, 40)),
        );
        assert_eq!(line.tone, Tone::Pass);
        assert_eq!(line.plain(), "PASSED: 1+1 track:  episode.mkv");
    }

    #[test]
    fn test_tolerance_failure_line() {
        let line = report_line(
            Path::new("movie.mkv"),
            &Ok(result(Verdict::ToleranceExceeded, 1, 2, 3500)),
        );
        assert_eq!(line.tone, Tone::Fail);
        assert_eq!(
            line.plain(),
            "FAILED: 1+2 tracks: movie.mkv (difference: 3s500ms) "
        );
    }

    #[test]
    fn test_no_audio_line() {
        let line = report_line(
            Path::new("silent.mp4"),
            &Ok(result(Verdict::NoAudioTracks, 1, 0, 0)),
        );
        assert_eq!(
            line.plain(),
            "FAILED: 1+0 tracks: silent.mp4 (NO AUDIO TRACKS FOUND) "
        );
    }

    #[test]
    fn test_no_video_line() {
        let line = report_line(
            Path::new("album.mka"),
            &Ok(result(Verdict::NoVideoTracks, 0, 1, 0)),
        );
        assert_eq!(
            line.plain(),
            "FAILED: 0+1 track:  album.mka (NO VIDEO TRACKS FOUND) "
        );
    }

    #[test]
    fn test_probe_error_line() {
        let line = report_line(
            Path::new("broken.mkv"),
            &Err(CoreError::ProbeOutput("expected value".into())),
        );
        assert_eq!(line.tone, Tone::Warn);
        assert_eq!(
            line.plain(),
            "FAILED: broken.mkv (probe failed: Malformed probe output: expected value) "
        );
    }

    #[test]
    fn test_report_lines_keep_order() {
        let reports = vec![
            FileReport {
                path: PathBuf::from("b.mkv"),
                outcome: Ok(result(Verdict::Passed, 1, 1, 0)),
            },
            FileReport {
                path: PathBuf::from("a.mkv"),
                outcome: Ok(result(Verdict::Passed, 1, 1, 0)),
            },
        ];
        let names: Vec<_> = report_lines(&reports)
            .into_iter()
            .map(|l| l.file_name)
            .collect();
        assert_eq!(names, ["b.mkv", "a.mkv"]);
    }
}
