//! System clipboard access for file references.
//!
//! The clipboard is reached through external platform programs: `osascript`
//! on macOS, `wl-copy`/`wl-paste` on Wayland and `xclip` on X11. Each is a
//! [`ClipboardTool`]; [`SystemClipboard`] tries them in priority order and
//! exposes the result through the [`Clipboard`](crate::platform::Clipboard)
//! capability used by the operations.
//!
//! # Example
//!
//! ```ignore
//! use yank_system_ops::clipboard::SystemClipboard;
//! use yank_system_ops::platform::Clipboard;
//!
//! let clipboard = SystemClipboard::new();
//! for path in clipboard.read_paths()? {
//!     println!("{}", path.display());
//! }
//! ```

mod error;
mod method;
pub mod tool;
pub mod tools;
pub mod uri;

pub use error::ClipboardError;
pub use method::ClipboardMethod;

use crate::platform::Clipboard;
use std::path::PathBuf;
use tool::{ClipboardTool, ToolError};
use tracing::{debug, warn};

/// Clipboard backed by the platform's clipboard programs.
///
/// Tries tools in priority order. A tool that is missing or does not
/// support the operation is skipped; a tool that fails is logged and the
/// next one is tried.
pub struct SystemClipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl SystemClipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: tools::platform_tools(),
        }
    }

    /// Create restricted to a single backend.
    pub fn only(method: ClipboardMethod) -> Self {
        Self {
            tools: vec![tools::tool_for(method)],
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Run `op` against each available tool until one succeeds.
    fn first_success<T>(
        &self,
        action: &str,
        op: impl Fn(&dyn ClipboardTool) -> Result<T, ToolError>,
    ) -> Result<T, ClipboardError> {
        let mut last_error: Option<(ClipboardMethod, String)> = None;

        for tool in &self.tools {
            if !tool.is_available() {
                debug!(tool = tool.name(), "clipboard tool unavailable");
                continue;
            }
            match op(tool.as_ref()) {
                Ok(value) => {
                    debug!(tool = tool.name(), action, "clipboard operation succeeded");
                    return Ok(value);
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(msg)) => {
                    warn!(tool = tool.name(), action, error = %msg, "clipboard tool failed, trying next tool");
                    last_error = Some((tool.method(), msg));
                }
            }
        }

        match last_error {
            Some((tool, message)) => Err(ClipboardError::ToolFailed { tool, message }),
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn read_paths(&self) -> Result<Vec<PathBuf>, ClipboardError> {
        self.first_success("read", |tool| tool.read_paths())
    }

    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        self.first_success("write", |tool| tool.write_paths(paths))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}
