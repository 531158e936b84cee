// verifytracks-cli/src/lib.rs
//
// Library portion of the verifytracks CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::verify::run_verify;
