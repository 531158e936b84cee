//! Configuration structures and constants for the verifytracks-core library.
//!
//! This module holds the knobs that control a verification run: the tolerance,
//! the probe executable, and which video codecs are treated as still images.

mod builder;

use std::path::PathBuf;

pub use builder::VerifyConfigBuilder;

// Default constants

/// Default maximum deviation between an audio track and the primary video
/// track, in milliseconds.
pub const DEFAULT_TOLERANCE_MS: u64 = 2000;

/// Default probe executable, resolved through `PATH`.
pub const DEFAULT_FFPROBE_BIN: &str = "ffprobe";

/// Video codecs that carry a still image (cover art) rather than a video
/// track. Streams using them are never counted as video.
pub const DEFAULT_EXCLUDED_VIDEO_CODECS: [&str; 2] = ["mjpeg", "png"];

/// Configuration for a verification run.
///
/// # Examples
///
/// ```rust
/// use verifytracks_core::config::VerifyConfigBuilder;
///
/// let config = VerifyConfigBuilder::new()
///     .tolerance_ms(500)
///     .ffprobe_bin("/usr/local/bin/ffprobe")
///     .build();
/// assert_eq!(config.tolerance_ms, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Maximum allowed deviation in milliseconds (inclusive).
    pub tolerance_ms: u64,

    /// Path or name of the ffprobe executable.
    pub ffprobe_bin: PathBuf,

    /// Video codec names excluded from the video track count.
    pub excluded_video_codecs: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            tolerance_ms: DEFAULT_TOLERANCE_MS,
            ffprobe_bin: PathBuf::from(DEFAULT_FFPROBE_BIN),
            excluded_video_codecs: DEFAULT_EXCLUDED_VIDEO_CODECS
                .iter()
                .map(|codec| (*codec).to_string())
                .collect(),
        }
    }
}

impl VerifyConfig {
    /// Creates a configuration with the given tolerance and all other
    /// settings at their defaults.
    #[must_use]
    pub fn with_tolerance(tolerance_ms: u64) -> Self {
        Self {
            tolerance_ms,
            ..Self::default()
        }
    }

    /// Returns true if `codec_name` is one of the excluded still-image codecs.
    /// Comparison is case-insensitive.
    #[must_use]
    pub fn is_excluded_video_codec(&self, codec_name: &str) -> bool {
        self.excluded_video_codecs
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(codec_name))
    }
}
