//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`. The user-facing lines the
//! commands print are plain `eprintln!`/`println!` and are not affected by
//! the log level.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::CommonOptions;

/// Filter directive for the given verbosity flags.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(options: &CommonOptions) {
    let level = level_for(options.verbose, options.quiet);
    let _ = fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
