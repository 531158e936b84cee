//! Implementation of the track verification run.
//!
//! Builds the core configuration from the command line, verifies every file
//! in order, then prints the report unless running quietly.

use crate::cli::Cli;
use crate::output::print_report;

use std::io::{self, Write};

use log::{debug, error, info};
use verifytracks_core::config::VerifyConfigBuilder;
use verifytracks_core::{TrackVerifier, VerifyConfig, check_dependency, report_lines};

/// Builds the core configuration from command-line arguments.
#[must_use]
pub fn build_config(cli: &Cli) -> VerifyConfig {
    VerifyConfigBuilder::new()
        .tolerance_ms(cli.tolerance)
        .ffprobe_bin(cli.ffprobe.clone())
        .build()
}

/// Verifies all files named on the command line and writes the report to `out`.
///
/// Returns `Ok(true)` only if every file passed. Per-file failures never stop
/// the run; only a failure to write the report is returned as an error.
pub fn run_verify(cli: &Cli, out: &mut impl Write) -> io::Result<bool> {
    let config = build_config(cli);
    debug!(
        "Verifying {} file(s) with tolerance {}ms using {}",
        cli.files.len(),
        config.tolerance_ms,
        config.ffprobe_bin.display()
    );

    if !cli.files.is_empty() {
        if let Err(e) = check_dependency(&config.ffprobe_bin) {
            // Every file will fail on its own; say why once up front.
            error!("{e}");
        }
    }

    let verifier = TrackVerifier::new(config);
    let outcome = verifier.verify_all(&cli.files);

    if !cli.quiet {
        print_report(out, &report_lines(&outcome.reports))?;
    }

    let all_passed = outcome.all_passed();
    info!(
        "{} of {} file(s) passed",
        outcome.reports.len() - outcome.failed_count(),
        outcome.reports.len()
    );
    Ok(all_passed)
}
