//! The three clipboard operations.
//!
//! Each operation is a flat sequence of validation, one clipboard call, and
//! filesystem work. They never print; the command handlers turn their
//! results into stderr lines and exit codes.

mod copy_files;
mod error;
mod extract_archive;
mod paste_files;
pub mod transfer;

pub use copy_files::{copy_files, CopyReport};
pub use error::OpsError;
pub use extract_archive::extract_archive;
pub use paste_files::{paste_files, PasteFailure, PasteReport};
