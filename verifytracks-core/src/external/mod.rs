// ============================================================================
// verifytracks-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe
//
// This module encapsulates the one external collaborator of verifytracks,
// ffprobe. It exposes a trait so verification can run against canned probe
// output in tests, and a concrete implementation that spawns the executable.
//
// KEY COMPONENTS:
// - FfprobeExecutor: trait for obtaining per-stream metadata
// - CommandFfprobeExecutor: subprocess-backed implementation
// - check_dependency: availability check for the probe executable
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions for ffprobe

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{CommandFfprobeExecutor, FFPROBE_ARGS, FfprobeExecutor};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command is available and executable.
///
/// Runs the command with `-version` and discards its output. Only a failure
/// to launch counts; the exit status is not inspected.
///
/// # Returns
///
/// * `Ok(())` - If the command could be launched
/// * `Err(CoreError::ProbeNotFound)` - If the command is not found
/// * `Err(CoreError::ProbeStart)` - If the command exists but fails to start
pub fn check_dependency(cmd: &Path) -> CoreResult<()> {
    let result = Command::new(cmd)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd.display());
            Err(CoreError::ProbeNotFound(cmd.display().to_string()))
        }
        Err(e) => {
            log::error!(
                "Failed to start dependency check command '{}': {}",
                cmd.display(),
                e
            );
            Err(CoreError::ProbeStart(cmd.display().to_string(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependency_missing() {
        let err = check_dependency(Path::new("verifytracks-definitely-missing-tool")).unwrap_err();
        assert!(matches!(err, CoreError::ProbeNotFound(name) if name == "verifytracks-definitely-missing-tool"));
    }
}
