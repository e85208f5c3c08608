//! Copy every clipboard file reference into a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::OpsError;
use super::transfer::{self, TransferError};
use crate::platform::{Clipboard, Filesystem};

/// One clipboard item that could not be copied.
#[derive(Debug, thiserror::Error)]
#[error("Failed to copy {} → {}: {error}", source_path.display(), destination_display(destination))]
pub struct PasteFailure {
    pub source_path: PathBuf,
    /// `None` when no destination could be derived from the source.
    pub destination: Option<PathBuf>,
    #[source]
    pub error: TransferError,
}

fn destination_display(destination: &Option<PathBuf>) -> String {
    destination
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Outcome of a paste; individual items may have failed.
#[derive(Debug, Default)]
pub struct PasteReport {
    /// Destinations written, in clipboard order.
    pub copied: Vec<PathBuf>,
    /// Items that failed, in clipboard order.
    pub failures: Vec<PasteFailure>,
}

impl PasteReport {
    /// Total number of clipboard items processed.
    pub fn total(&self) -> usize {
        self.copied.len() + self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copy each clipboard item into `target`, named by its base name.
///
/// Existing entries at a destination are replaced. A failing item is
/// recorded in the report and the remaining items are still processed.
///
/// # Errors
/// - `OpsError::NoFileUrls` - the clipboard holds no file references
/// - `OpsError::Clipboard` - the clipboard could not be read
pub fn paste_files(
    target: &Path,
    clipboard: &dyn Clipboard,
    fs: &dyn Filesystem,
) -> Result<PasteReport, OpsError> {
    let items = clipboard.read_paths()?;
    if items.is_empty() {
        return Err(OpsError::NoFileUrls);
    }

    let mut report = PasteReport::default();

    for source in items {
        let destination = match transfer::destination_for(target, &source) {
            Ok(destination) => destination,
            Err(error) => {
                report.failures.push(PasteFailure {
                    source_path: source,
                    destination: None,
                    error,
                });
                continue;
            }
        };

        match transfer::replace(fs, &source, &destination) {
            Ok(()) => report.copied.push(destination),
            Err(error) => {
                debug!(from = %source.display(), error = %error, "item failed to copy");
                report.failures.push(PasteFailure {
                    source_path: source,
                    destination: Some(destination),
                    error,
                });
            }
        }
    }

    info!(
        copied = report.copied.len(),
        total = report.total(),
        "Copied {} of {} items",
        report.copied.len(),
        report.total()
    );

    Ok(report)
}
