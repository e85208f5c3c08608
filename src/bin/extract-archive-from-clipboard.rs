//! extract-archive-from-clipboard - Copy the clipboard archive into a directory and print its path.

use std::process::ExitCode;

use yank_system_ops::cli::ExtractArchiveCli;
use yank_system_ops::{commands, logging};

fn main() -> ExitCode {
    let cli: ExtractArchiveCli = match commands::parse_or_exit() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init(&cli.options);
    commands::exit_code(commands::extract::handle(&cli))
}
