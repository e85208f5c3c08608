//! The trait every clipboard backend implements.

use super::method::ClipboardMethod;
use std::path::PathBuf;

/// Failure of a single backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The backend cannot perform this operation at all.
    NotSupported,
    /// The backend program is not installed.
    NotFound,
    /// The backend ran and failed.
    Failed(String),
}

impl ToolError {
    /// Map an I/O error from spawning a backend process.
    pub fn from_spawn(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ToolError::NotFound
        } else {
            ToolError::Failed(err.to_string())
        }
    }
}

/// One way of reaching the system clipboard.
///
/// Implementations shell out to a platform program. They replace the whole
/// clipboard on write and return every file reference on read.
pub trait ClipboardTool {
    fn method(&self) -> ClipboardMethod;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether this tool can run on the current system.
    fn is_available(&self) -> bool;

    /// Read the file references currently on the clipboard, in order.
    ///
    /// A clipboard that holds no file references yields an empty list.
    fn read_paths(&self) -> Result<Vec<PathBuf>, ToolError>;

    /// Replace the clipboard content with the given file references.
    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ToolError>;
}
