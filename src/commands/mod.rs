//! Command handlers for the three executables.
//!
//! Each handler runs one operation against the real clipboard and disk,
//! writes the user-facing lines, and returns an error for the binary to
//! print and turn into exit status 1.

pub mod copy;
pub mod extract;
pub mod paste;

use std::process::ExitCode;

use clap::Parser;

/// Parse arguments, or report a usage error with exit status 1.
///
/// `--help` and `--version` still exit 0.
pub fn parse_or_exit<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|err| {
        // The exit status still reports a usage error if stderr is closed.
        err.print().ok();
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Print a failure as a single stderr line and map it to an exit status.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
