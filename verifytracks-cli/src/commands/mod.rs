//! Command implementations for the CLI.

/// Verification of audio/video track durations for a list of files.
pub mod verify;
