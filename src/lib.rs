//! yank-system-ops library
//!
//! Clipboard file-reference operations behind three small executables:
//! copy paths onto the clipboard, paste clipboard files into a directory,
//! and copy a clipboard archive into a directory.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod logging;
pub mod ops;
pub mod platform;

pub use clipboard::{ClipboardError, ClipboardMethod, SystemClipboard};
pub use ops::{copy_files, extract_archive, paste_files, OpsError};
pub use platform::{Clipboard, Filesystem, LocalFilesystem, MemoryClipboard};
