//! FFprobe integration for stream metadata extraction
//!
//! This module runs ffprobe as a subprocess and turns its JSON output into
//! [`StreamDescriptor`] values. The [`FfprobeExecutor`] trait is the seam
//! verification goes through, so tests can serve canned probe output.

use crate::error::{CoreError, CoreResult, probe_failed_error};
use crate::media::{StreamDescriptor, parse_streams};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Arguments passed to ffprobe ahead of the input path.
pub const FFPROBE_ARGS: [&str; 4] = ["-hide_banner", "-show_streams", "-print_format", "json"];

/// Source of per-stream metadata for a media file.
pub trait FfprobeExecutor {
    /// Returns the streams of `input_path` in probe order.
    fn probe_streams(&self, input_path: &Path) -> CoreResult<Vec<StreamDescriptor>>;
}

/// [`FfprobeExecutor`] that runs an ffprobe executable.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    ffprobe_bin: PathBuf,
}

impl CommandFfprobeExecutor {
    /// Creates an executor for the given ffprobe binary (name or path).
    pub fn new(ffprobe_bin: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_bin: ffprobe_bin.into(),
        }
    }

    fn tool_name(&self) -> String {
        self.ffprobe_bin.display().to_string()
    }

    /// Builds the ffprobe command for `input_path`.
    fn command(&self, input_path: &Path) -> Command {
        let mut cmd = Command::new(&self.ffprobe_bin);
        cmd.args(FFPROBE_ARGS).arg(input_path);
        cmd
    }
}

impl Default for CommandFfprobeExecutor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FFPROBE_BIN)
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe_streams(&self, input_path: &Path) -> CoreResult<Vec<StreamDescriptor>> {
        let mut cmd = self.command(input_path);
        log::debug!("Running ffprobe: {cmd:?}");

        let output = cmd.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CoreError::ProbeNotFound(self.tool_name())
            } else {
                CoreError::ProbeStart(self.tool_name(), e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::error!(
                "ffprobe failed on {}: {}",
                input_path.display(),
                stderr.trim()
            );
            return Err(probe_failed_error(self.tool_name(), output.status, stderr));
        }

        let streams = parse_streams(&output.stdout)?;
        log::debug!(
            "ffprobe reported {} stream(s) for {}",
            streams.len(),
            input_path.display()
        );
        Ok(streams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_matches_probe_contract() {
        let executor = CommandFfprobeExecutor::new("ffprobe");
        let cmd = executor.command(Path::new("movie.mkv"));

        assert_eq!(cmd.get_program(), "ffprobe");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            [
                "-hide_banner",
                "-show_streams",
                "-print_format",
                "json",
                "movie.mkv"
            ]
        );
    }

    #[test]
    fn test_missing_executable_is_probe_not_found() {
        let executor = CommandFfprobeExecutor::new("verifytracks-no-such-ffprobe-binary");
        let err = executor
            .probe_streams(Path::new("movie.mkv"))
            .unwrap_err();
        assert!(matches!(err, CoreError::ProbeNotFound(_)));
        assert!(err.is_invocation_error());
    }
}
