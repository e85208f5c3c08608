//! Put file references on the clipboard.

use std::path::PathBuf;

use tracing::{debug, info};

use super::error::OpsError;
use crate::platform::{Clipboard, Filesystem};

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Paths now on the clipboard, in argument order.
    pub copied: Vec<PathBuf>,
    /// Arguments that did not exist and were skipped.
    pub missing: Vec<PathBuf>,
}

/// Replace the clipboard with the given paths, skipping ones that don't exist.
///
/// The clipboard is only touched when at least one path exists.
///
/// # Errors
/// - `OpsError::NoFilesProvided` - `paths` is empty
/// - `OpsError::NoValidFiles` - none of `paths` exist
/// - `OpsError::Clipboard` - the clipboard could not be written
pub fn copy_files(
    paths: &[PathBuf],
    clipboard: &dyn Clipboard,
    fs: &dyn Filesystem,
) -> Result<CopyReport, OpsError> {
    if paths.is_empty() {
        return Err(OpsError::NoFilesProvided);
    }

    let (copied, missing): (Vec<PathBuf>, Vec<PathBuf>) =
        paths.iter().cloned().partition(|path| fs.exists(path));

    for path in &missing {
        debug!(path = %path.display(), "skipping missing path");
    }

    if copied.is_empty() {
        return Err(OpsError::NoValidFiles { missing });
    }

    clipboard.write_paths(&copied)?;
    info!(count = copied.len(), "placed file references on clipboard");

    Ok(CopyReport { copied, missing })
}
