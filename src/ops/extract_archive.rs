//! Copy the clipboard's archive into a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::OpsError;
use super::transfer;
use crate::platform::{Clipboard, Filesystem};

/// Copy the first clipboard item into `target` and return its absolute path.
///
/// Only the first clipboard entry is used; any others are ignored. An
/// existing entry at the destination is replaced. Nothing is extracted
/// from the archive itself.
///
/// # Errors
/// - `OpsError::TargetNotDirectory` - `target` is missing or not a directory
/// - `OpsError::NoFileInClipboard` - the clipboard holds no file references
/// - `OpsError::CopyArchive` - removing the old destination or copying failed
/// - `OpsError::Clipboard` - the clipboard could not be read
pub fn extract_archive(
    target: &Path,
    clipboard: &dyn Clipboard,
    fs: &dyn Filesystem,
) -> Result<PathBuf, OpsError> {
    if !fs.is_dir(target) {
        return Err(OpsError::TargetNotDirectory {
            path: target.to_path_buf(),
        });
    }

    let items = clipboard.read_paths()?;
    let archive = items.first().ok_or(OpsError::NoFileInClipboard)?;
    if items.len() > 1 {
        debug!(ignored = items.len() - 1, "using first clipboard item only");
    }

    let target = std::path::absolute(target).map_err(|source| OpsError::ResolveTarget {
        path: target.to_path_buf(),
        source,
    })?;
    let destination = transfer::destination_for(&target, archive).map_err(OpsError::CopyArchive)?;

    transfer::replace(fs, archive, &destination).map_err(OpsError::CopyArchive)?;
    info!(archive = %archive.display(), destination = %destination.display(), "archive copied");

    Ok(destination)
}
