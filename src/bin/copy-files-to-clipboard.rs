//! copy-files-to-clipboard - Copy file references onto the system clipboard.

use std::process::ExitCode;

use yank_system_ops::cli::CopyFilesCli;
use yank_system_ops::{commands, logging};

fn main() -> ExitCode {
    let cli: CopyFilesCli = match commands::parse_or_exit() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init(&cli.options);
    commands::exit_code(commands::copy::handle(&cli))
}
