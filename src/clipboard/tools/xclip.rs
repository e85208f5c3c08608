//! Linux X11 clipboard backend.

use crate::clipboard::method::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::uri::{build_uri_list, parse_uri_list};
use std::path::PathBuf;

use super::{pipe_into, program_exists, read_from};

/// Messages xclip prints when the clipboard holds no `text/uri-list`.
const EMPTY_MARKERS: &[&str] = &["not available"];

/// Linux X11 clipboard tool using xclip.
///
/// File references travel as a `text/uri-list` selection target.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xclip {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && program_exists("xclip")
    }

    fn read_paths(&self) -> Result<Vec<PathBuf>, ToolError> {
        let list = read_from(
            "xclip",
            &["-selection", "clipboard", "-t", "text/uri-list", "-o"],
            EMPTY_MARKERS,
        )?;
        Ok(list.map(|l| parse_uri_list(&l)).unwrap_or_default())
    }

    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ToolError> {
        pipe_into(
            "xclip",
            &["-selection", "clipboard", "-t", "text/uri-list"],
            &build_uri_list(paths),
        )
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
