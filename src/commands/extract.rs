//! extract-archive-from-clipboard handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::cli::ExtractArchiveCli;
use crate::ops::extract_archive;
use crate::platform::{Clipboard, Filesystem, LocalFilesystem};

/// Copy the clipboard's archive into the target directory and print its path.
pub fn handle(cli: &ExtractArchiveCli) -> Result<()> {
    let clipboard = cli.options.clipboard();
    run(
        &cli.target_dir,
        &clipboard,
        &LocalFilesystem,
        &mut io::stdout().lock(),
    )
}

/// Run the extract. Only a successful copy writes to `stdout`.
pub fn run(
    target: &Path,
    clipboard: &dyn Clipboard,
    fs: &dyn Filesystem,
    stdout: &mut dyn Write,
) -> Result<()> {
    let destination = extract_archive(target, clipboard, fs)?;
    writeln!(stdout, "{}", destination.display())?;
    stdout.flush()?;
    Ok(())
}
