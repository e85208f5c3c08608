//! Linux Wayland clipboard backend.

use crate::clipboard::method::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::uri::{build_uri_list, parse_uri_list};
use std::path::PathBuf;

use super::{pipe_into, program_exists, read_from};

/// Messages wl-paste prints when nothing usable is on the clipboard.
const EMPTY_MARKERS: &[&str] = &[
    "No selection",
    "Nothing is copied",
    "No suitable type of content copied",
    "not available",
];

/// Wayland clipboard tool using `wl-copy` and `wl-paste`.
pub struct WlClipboard;

impl WlClipboard {
    /// Create a new WlClipboard tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for WlClipboard {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::WlClipboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && program_exists("wl-copy")
            && program_exists("wl-paste")
    }

    fn read_paths(&self) -> Result<Vec<PathBuf>, ToolError> {
        let list = read_from(
            "wl-paste",
            &["--no-newline", "--type", "text/uri-list"],
            EMPTY_MARKERS,
        )?;
        Ok(list.map(|l| parse_uri_list(&l)).unwrap_or_default())
    }

    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ToolError> {
        pipe_into("wl-copy", &["--type", "text/uri-list"], &build_uri_list(paths))
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}
