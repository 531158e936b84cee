//! Core library for verifying that audio and video tracks of media files have
//! matching durations.
//!
//! Stream metadata is obtained from ffprobe, audio and video tracks are
//! classified (still-image video such as cover art is ignored), and every
//! audio track is compared against the primary video track.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use verifytracks_core::config::VerifyConfigBuilder;
//! use verifytracks_core::{TrackVerifier, report};
//! use std::path::PathBuf;
//!
//! let config = VerifyConfigBuilder::new().tolerance_ms(2000).build();
//! let verifier = TrackVerifier::new(config);
//!
//! let files = vec![PathBuf::from("a.mkv"), PathBuf::from("b.mkv")];
//! let outcome = verifier.verify_all(&files);
//! for line in report::report_lines(&outcome.reports) {
//!     println!("{line}");
//! }
//! std::process::exit(if outcome.all_passed() { 0 } else { 1 });
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod media;
pub mod report;
pub mod utils;
pub mod verification;

// Re-exports for public API
pub use config::{VerifyConfig, VerifyConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor, check_dependency};
pub use media::{CodecType, StreamDescriptor, parse_streams};
pub use report::{Detail, ReportLine, Tone, report_line, report_lines};
pub use utils::{DurationBreakdown, format_duration_ms};
pub use verification::{
    BatchOutcome, FileReport, TrackSet, TrackVerifier, VerificationResult, Verdict, verify_file,
};
