//! copy-files-to-clipboard handler

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::cli::CopyFilesCli;
use crate::ops::{copy_files, OpsError};
use crate::platform::{Clipboard, Filesystem, LocalFilesystem};

/// Place the given paths on the system clipboard.
pub fn handle(cli: &CopyFilesCli) -> Result<()> {
    let clipboard = cli.options.clipboard();
    run(&cli.paths, &clipboard, &LocalFilesystem, &mut io::stderr())
}

/// Run the copy, reporting skipped paths on `stderr`.
pub fn run(
    paths: &[PathBuf],
    clipboard: &dyn Clipboard,
    fs: &dyn Filesystem,
    stderr: &mut dyn Write,
) -> Result<()> {
    match copy_files(paths, clipboard, fs) {
        Ok(report) => {
            report_missing(stderr, &report.missing)?;
            Ok(())
        }
        Err(OpsError::NoValidFiles { missing }) => {
            report_missing(stderr, &missing)?;
            Err(OpsError::NoValidFiles { missing }.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn report_missing(stderr: &mut dyn Write, missing: &[PathBuf]) -> io::Result<()> {
    for path in missing {
        writeln!(stderr, "File not found: {}", path.display())?;
    }
    Ok(())
}
