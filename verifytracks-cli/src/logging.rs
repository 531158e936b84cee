// ============================================================================
// verifytracks-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization
//
// The application logs through the standard `log` facade with `env_logger`
// as the backend. Logs go to stderr so the report lines on stdout stay clean
// for pipelines.
//
// USAGE:
// - default: warnings and errors only
// - --verbose: debug output from verifytracks crates
// - RUST_LOG=...: overrides both
//
// AI-ASSISTANT-INFO: Logging initialization for the CLI

use log::LevelFilter;

/// Environment variable consulted for log filters.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Returns the default level filter for the given verbosity.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes env_logger. `RUST_LOG`, when set, takes precedence over the
/// verbosity default.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .format_target(verbose)
        .target(env_logger::Target::Stderr);

    if let Ok(filters) = std::env::var(LOG_ENV_VAR) {
        builder.parse_filters(&filters);
    }

    // A logger may already be installed when running under a test harness.
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized with level: {}", default_level(verbose));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Warn);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
