//! Placing one clipboard item into a target directory.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::platform::Filesystem;

/// Why a single item could not be placed.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("{} has no file name", path.display())]
    NoFileName { path: PathBuf },

    #[error("could not remove existing {}: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Copy(#[source] io::Error),
}

/// Where `source` lands inside `target`: the target joined with its base name.
pub fn destination_for(target: &Path, source: &Path) -> Result<PathBuf, TransferError> {
    source
        .file_name()
        .map(|name| target.join(name))
        .ok_or_else(|| TransferError::NoFileName {
            path: source.to_path_buf(),
        })
}

/// Copy `source` to `destination`, replacing whatever is already there.
///
/// When both already name the same file the item is left as is; removing
/// the destination would delete the source.
pub fn replace(fs: &dyn Filesystem, source: &Path, destination: &Path) -> Result<(), TransferError> {
    if fs.same_file(source, destination) {
        debug!(path = %destination.display(), "source already at destination");
        return Ok(());
    }

    // Removal goes by the entry itself, so a dangling symlink is cleared too.
    match fs.remove_item(destination) {
        Ok(()) => debug!(path = %destination.display(), "removed existing destination"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(TransferError::Remove {
                path: destination.to_path_buf(),
                source,
            })
        }
    }

    debug!(from = %source.display(), to = %destination.display(), "copying");
    fs.copy_item(source, destination).map_err(TransferError::Copy)
}
