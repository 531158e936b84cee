// ============================================================================
// verifytracks-core/src/verification/mod.rs
// ============================================================================
//
// TRACK VERIFICATION: Audio vs Video Duration Checks
//
// This module decides whether the audio tracks of a media file match the
// duration of its primary video track within a tolerance.
//
// KEY COMPONENTS:
// - TrackVerifier: probes a file and computes its verdict
// - TrackSet: audio/video classification of probed streams
// - VerificationResult / Verdict: per-file outcome
// - BatchOutcome: per-file outcomes of a sequential batch
//
// Verification of one file never aborts a batch. Probe and parse errors are
// recorded in that file's FileReport and the next file is processed.
//
// AI-ASSISTANT-INFO: Core verification logic for audio/video track durations

mod result;
mod tracks;

pub use result::{BatchOutcome, FileReport, VerificationResult, Verdict, track_label};
pub use tracks::TrackSet;

use std::path::{Path, PathBuf};

use crate::config::VerifyConfig;
use crate::error::CoreResult;
use crate::external::{CommandFfprobeExecutor, FfprobeExecutor};
use crate::media::StreamDescriptor;

/// Verifies audio/video track durations of media files.
///
/// # Examples
///
/// ```rust,no_run
/// use verifytracks_core::{TrackVerifier, VerifyConfig};
/// use std::path::Path;
///
/// let verifier = TrackVerifier::new(VerifyConfig::default());
/// let result = verifier.verify(Path::new("movie.mkv")).unwrap();
/// println!("{} (max deviation {}ms)", result.verdict, result.max_deviation_ms);
/// ```
#[derive(Debug, Clone)]
pub struct TrackVerifier<E = CommandFfprobeExecutor> {
    config: VerifyConfig,
    executor: E,
}

impl TrackVerifier<CommandFfprobeExecutor> {
    /// Creates a verifier that runs the ffprobe named in `config`.
    #[must_use]
    pub fn new(config: VerifyConfig) -> Self {
        let executor = CommandFfprobeExecutor::new(config.ffprobe_bin.clone());
        Self { config, executor }
    }
}

impl<E: FfprobeExecutor> TrackVerifier<E> {
    /// Creates a verifier that obtains stream metadata from `executor`.
    pub fn with_executor(config: VerifyConfig, executor: E) -> Self {
        Self { config, executor }
    }

    /// Probes `path` and verifies its track durations.
    pub fn verify(&self, path: &Path) -> CoreResult<VerificationResult> {
        log::debug!("Verifying {}", path.display());
        let streams = self.executor.probe_streams(path)?;
        let result = self.evaluate(&streams)?;
        log::debug!(
            "{}: {} video, {} audio, max deviation {}ms -> {}",
            path.display(),
            result.video_tracks,
            result.audio_tracks,
            result.max_deviation_ms,
            result.verdict
        );
        Ok(result)
    }

    /// Computes the verdict for already-probed streams.
    pub fn evaluate(&self, streams: &[StreamDescriptor]) -> CoreResult<VerificationResult> {
        let tracks = TrackSet::classify(streams, &self.config)?;
        Ok(self.judge(&tracks))
    }

    fn judge(&self, tracks: &TrackSet) -> VerificationResult {
        let tolerance_ms = self.config.tolerance_ms;
        let (verdict, max_deviation_ms) = if tracks.audio_ms.is_empty() {
            (Verdict::NoAudioTracks, 0)
        } else {
            match tracks.max_deviation_ms() {
                None => (Verdict::NoVideoTracks, 0),
                Some(deviation) if deviation <= tolerance_ms => (Verdict::Passed, deviation),
                Some(deviation) => (Verdict::ToleranceExceeded, deviation),
            }
        };

        VerificationResult {
            verdict,
            video_tracks: tracks.video_ms.len(),
            audio_tracks: tracks.audio_ms.len(),
            max_deviation_ms,
            tolerance_ms,
        }
    }

    /// Verifies each path in order, recording every outcome.
    pub fn verify_all(&self, paths: &[PathBuf]) -> BatchOutcome {
        let reports = paths
            .iter()
            .map(|path| {
                let outcome = self.verify(path);
                match &outcome {
                    Ok(result) if !result.passed() => {
                        log::warn!("{}: {}", path.display(), result.verdict);
                    }
                    Err(e) => log::error!("Could not verify {}: {}", path.display(), e),
                    Ok(_) => {}
                }
                FileReport {
                    path: path.clone(),
                    outcome,
                }
            })
            .collect();

        BatchOutcome { reports }
    }
}

/// Verifies a single file with the default ffprobe and the given tolerance.
pub fn verify_file(path: &Path, tolerance_ms: u64) -> CoreResult<VerificationResult> {
    TrackVerifier::new(VerifyConfig::with_tolerance(tolerance_ms)).verify(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::media::CodecType;

    fn verifier(tolerance_ms: u64) -> TrackVerifier<NoProbe> {
        TrackVerifier::with_executor(VerifyConfig::with_tolerance(tolerance_ms), NoProbe)
    }

    struct NoProbe;

    impl FfprobeExecutor for NoProbe {
        fn probe_streams(&self, _: &Path) -> CoreResult<Vec<StreamDescriptor>> {
            unreachable!("evaluate() does not probe")
        }
    }

    fn s(codec_type: CodecType, codec: &str, secs: f64) -> StreamDescriptor {
        StreamDescriptor {
            index: 0,
            codec_type,
            codec_name: Some(codec.to_string()),
            duration_secs: Some(secs),
        }
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let streams = [s(CodecType::Video, "h264", 10.0), s(CodecType::Audio, "aac", 12.0)];
        assert!(verifier(2000).evaluate(&streams).unwrap().passed());
        assert!(!verifier(1999).evaluate(&streams).unwrap().passed());
    }

    #[test]
    fn test_audio_shorter_than_video_counts_too() {
        let streams = [s(CodecType::Video, "h264", 13.5), s(CodecType::Audio, "aac", 10.0)];
        let result = verifier(2000).evaluate(&streams).unwrap();
        assert_eq!(result.verdict, Verdict::ToleranceExceeded);
        assert_eq!(result.max_deviation_ms, 3500);
        assert_eq!(result.deviation_label(), "3s500ms");
    }

    #[test]
    fn test_no_streams_is_no_audio() {
        let result = verifier(2000).evaluate(&[]).unwrap();
        assert_eq!(result.verdict, Verdict::NoAudioTracks);
        assert_eq!(result.video_tracks, 0);
        assert_eq!(result.audio_tracks, 0);
    }

    #[test]
    fn test_verify_file_reports_probe_failure_for_unreadable_input() {
        let err = verify_file(Path::new("verifytracks-no-such-input.mkv"), 2000).unwrap_err();
        assert!(err.is_invocation_error(), "unexpected error: {err}");
        assert!(matches!(
            err,
            CoreError::ProbeNotFound(_) | CoreError::ProbeStart(..) | CoreError::ProbeFailed { .. }
        ));
    }

    #[test]
    fn test_verifier_from_config_uses_configured_probe() {
        let config = crate::config::VerifyConfigBuilder::new()
            .ffprobe_bin("verifytracks-no-such-ffprobe")
            .build();
        let err = TrackVerifier::new(config)
            .verify(Path::new("x.mkv"))
            .unwrap_err();
        assert!(
            matches!(&err, CoreError::ProbeNotFound(name) if name == "verifytracks-no-such-ffprobe"),
            "unexpected error: {err}"
        );
    }
}
