//! paste-files-from-clipboard handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::PasteFilesCli;
use crate::ops::paste_files;
use crate::platform::{Clipboard, Filesystem, LocalFilesystem};

/// Copy the clipboard's files into the target directory.
pub fn handle(cli: &PasteFilesCli) -> Result<()> {
    let clipboard = cli.options.clipboard();
    run(
        &cli.target_dir,
        cli.strict,
        &clipboard,
        &LocalFilesystem,
        &mut io::stderr(),
    )
}

/// Run the paste, reporting each failed item on `stderr`.
///
/// Item failures only fail the command when `strict` is set.
pub fn run(
    target: &Path,
    strict: bool,
    clipboard: &dyn Clipboard,
    fs: &dyn Filesystem,
    stderr: &mut dyn Write,
) -> Result<()> {
    let report = paste_files(target, clipboard, fs)?;

    for failure in &report.failures {
        writeln!(stderr, "{}", failure)?;
    }

    if strict && !report.all_succeeded() {
        bail!(
            "{} of {} items failed to copy",
            report.failures.len(),
            report.total()
        );
    }
    Ok(())
}
