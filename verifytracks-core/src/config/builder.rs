// ============================================================================
// verifytracks-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for VerifyConfig
//
// Fluent construction of VerifyConfig. Every field starts at its default, so
// callers only set what they override.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for VerifyConfig

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::VerifyConfig;

/// Builder for creating VerifyConfig instances.
///
/// # Examples
///
/// ```rust
/// use verifytracks_core::config::VerifyConfigBuilder;
///
/// let config = VerifyConfigBuilder::new()
///     .tolerance_ms(250)
///     .excluded_video_codecs(["mjpeg", "png", "bmp"])
///     .build();
/// assert!(config.is_excluded_video_codec("bmp"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VerifyConfigBuilder {
    config: VerifyConfig,
}

impl VerifyConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum allowed deviation in milliseconds.
    #[must_use]
    pub fn tolerance_ms(mut self, tolerance_ms: u64) -> Self {
        self.config.tolerance_ms = tolerance_ms;
        self
    }

    /// Sets the ffprobe executable to invoke.
    #[must_use]
    pub fn ffprobe_bin(mut self, ffprobe_bin: impl Into<PathBuf>) -> Self {
        self.config.ffprobe_bin = ffprobe_bin.into();
        self
    }

    /// Replaces the list of still-image video codecs.
    #[must_use]
    pub fn excluded_video_codecs<I, S>(mut self, codecs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excluded_video_codecs = codecs.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> VerifyConfig {
        self.config
    }
}
