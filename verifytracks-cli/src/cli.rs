// verifytracks-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::path::PathBuf;
use verifytracks_core::config::{DEFAULT_FFPROBE_BIN, DEFAULT_TOLERANCE_MS};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "verifytracks",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Check that the audio and video tracks are roughly the same length.",
    long_about = "Checks that every audio track of each media file is within a tolerance \
                  of the primary video track's duration, using ffprobe. Exits non-zero if \
                  any file fails."
)]
pub struct Cli {
    /// File(s) to verify
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Suppress output; the exit status still reports failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Tolerance for reporting pass, in milliseconds
    #[arg(
        short,
        long,
        value_name = "MS",
        default_value_t = DEFAULT_TOLERANCE_MS,
        env = "VERIFYTRACKS_TOLERANCE"
    )]
    pub tolerance: u64,

    /// ffprobe executable to use
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_FFPROBE_BIN,
        env = "VERIFYTRACKS_FFPROBE"
    )]
    pub ffprobe: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
