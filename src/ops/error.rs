//! Errors reported by the clipboard operations.
//!
//! The `Display` text of each variant is the exact line the executables
//! print on stderr.

use std::path::PathBuf;

use super::transfer::TransferError;
use crate::clipboard::ClipboardError;

#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("No files provided")]
    NoFilesProvided,

    /// Every argument was missing; `missing` lists them in argument order.
    #[error("No valid files to copy")]
    NoValidFiles { missing: Vec<PathBuf> },

    #[error("No file URLs found in clipboard")]
    NoFileUrls,

    #[error("Target directory does not exist: {}", path.display())]
    TargetNotDirectory { path: PathBuf },

    #[error("Failed to resolve target directory {}: {source}", path.display())]
    ResolveTarget {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No file found in clipboard")]
    NoFileInClipboard,

    #[error("Failed to copy archive: {0}")]
    CopyArchive(#[source] TransferError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
