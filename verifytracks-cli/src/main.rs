// verifytracks-cli/src/main.rs
//
// Entry point for the verifytracks command-line tool.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Setting up logging.
// - Running the verification over every file.
// - Mapping the aggregate result to the process exit code
//   (0 when every file passed, 1 otherwise).

use clap::Parser;
use std::io;
use std::process;
use verifytracks_cli::{Cli, logging, run_verify};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let all_passed = run_verify(&cli, &mut stdout.lock())?;

    if !all_passed {
        process::exit(1);
    }
    Ok(())
}
