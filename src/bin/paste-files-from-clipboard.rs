//! paste-files-from-clipboard - Paste clipboard files and folders into a directory.

use std::process::ExitCode;

use yank_system_ops::cli::PasteFilesCli;
use yank_system_ops::{commands, logging};

fn main() -> ExitCode {
    let cli: PasteFilesCli = match commands::parse_or_exit() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init(&cli.options);
    commands::exit_code(commands::paste::handle(&cli))
}
