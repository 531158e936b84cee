// ============================================================================
// verifytracks-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// Every failure that can happen while verifying a single file is represented
// here. None of these abort a batch: the batch runner records them per file
// and moves on.
//
// KEY COMPONENTS:
// - CoreError: probe invocation failures, malformed probe output
// - CoreResult: result alias used across the crate
//
// Missing audio or video tracks are verdicts, not errors. See
// `verification::Verdict`.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while probing or interpreting a media file.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The probe executable could not be found.
    #[error("Required dependency not found: {0}")]
    ProbeNotFound(String),

    /// The probe executable exists but could not be launched.
    #[error("Failed to start {0}: {1}")]
    ProbeStart(String, #[source] io::Error),

    /// The probe ran but exited unsuccessfully.
    #[error("{tool} exited with {status}: {stderr}")]
    ProbeFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The probe output was not JSON, or not the expected shape.
    #[error("Malformed probe output: {0}")]
    ProbeOutput(String),

    /// A stream that takes part in verification lacks a required field.
    #[error("Stream #{index} is missing required field '{field}'")]
    MissingStreamField { index: usize, field: &'static str },

    /// A stream duration that is not a non-negative, finite number of seconds.
    #[error("Stream #{index} has invalid duration '{value}'")]
    InvalidDuration { index: usize, value: String },
}

impl CoreError {
    /// True for errors caused by the probe itself rather than its output.
    #[must_use]
    pub fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            CoreError::ProbeNotFound(_) | CoreError::ProbeStart(..) | CoreError::ProbeFailed { .. }
        )
    }
}

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds the error for a probe process that exited unsuccessfully.
pub(crate) fn probe_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::ProbeFailed {
        tool: tool.into(),
        status,
        stderr: stderr.into().trim().to_string(),
    }
}
