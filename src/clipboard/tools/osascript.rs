//! macOS pasteboard backend.

use crate::clipboard::method::ClipboardMethod;
use crate::clipboard::tool::{ClipboardTool, ToolError};
use std::path::PathBuf;
use std::process::Command;

/// macOS clipboard tool.
///
/// Drives `NSPasteboard` through `osascript -l JavaScript`, writing one
/// `NSURL` per path so Finder and other apps paste them as files.
pub struct OsaScript;

impl OsaScript {
    /// Create a new OsaScript tool.
    pub fn new() -> Self {
        Self
    }

    /// Build the script that replaces the pasteboard with file URLs.
    ///
    /// Paths are embedded as a JSON array, which is also a valid
    /// JavaScript literal, so no manual escaping is needed. Paths that are
    /// not valid UTF-8 cannot be passed to `NSURL` and are rejected.
    pub fn build_write_script(paths: &[PathBuf]) -> Result<String, ToolError> {
        let paths = paths
            .iter()
            .map(|p| {
                p.to_str().ok_or_else(|| {
                    ToolError::Failed(format!("path is not valid UTF-8: {}", p.display()))
                })
            })
            .collect::<Result<Vec<&str>, ToolError>>()?;
        let literal = serde_json::to_string(&paths)
            .map_err(|e| ToolError::Failed(format!("could not encode paths: {}", e)))?;

        Ok(format!(
            "ObjC.import('AppKit');\n\
             var pb = $.NSPasteboard.generalPasteboard;\n\
             pb.clearContents;\n\
             var urls = $.NSMutableArray.array;\n\
             {}.forEach(function (p) {{ urls.addObject($.NSURL.fileURLWithPath(p)); }});\n\
             pb.writeObjects(urls) ? 'ok' : 'failed';",
            literal
        ))
    }

    /// Build the script that prints the pasteboard's file URLs as JSON.
    pub fn build_read_script() -> &'static str {
        "ObjC.import('AppKit');\n\
         var pb = $.NSPasteboard.generalPasteboard;\n\
         var items = pb.readObjectsForClassesOptions($([$.NSURL]), $());\n\
         var out = [];\n\
         if (!items.isNil()) {\n\
           for (var i = 0; i < items.count; i++) {\n\
             var url = items.objectAtIndex(i);\n\
             if (url.isFileURL) { out.push(url.path.js); }\n\
           }\n\
         }\n\
         JSON.stringify(out);"
    }

    /// Parse the read script's output.
    pub fn parse_read_output(stdout: &str) -> Result<Vec<PathBuf>, ToolError> {
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        let paths: Vec<String> = serde_json::from_str(trimmed)
            .map_err(|e| ToolError::Failed(format!("unexpected osascript output: {}", e)))?;
        Ok(paths.into_iter().map(PathBuf::from).collect())
    }

    /// Run a JavaScript for Automation script and return its stdout.
    fn run_script(script: &str) -> Result<String, ToolError> {
        let output = Command::new("osascript")
            .args(["-l", "JavaScript", "-e", script])
            .output()
            .map_err(ToolError::from_spawn)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(ToolError::Failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

impl ClipboardTool for OsaScript {
    fn method(&self) -> ClipboardMethod {
        ClipboardMethod::OsaScript
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn read_paths(&self) -> Result<Vec<PathBuf>, ToolError> {
        let stdout = Self::run_script(Self::build_read_script())?;
        Self::parse_read_output(&stdout)
    }

    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ToolError> {
        let stdout = Self::run_script(&Self::build_write_script(paths)?)?;
        match stdout.trim() {
            "ok" => Ok(()),
            other => Err(ToolError::Failed(format!(
                "pasteboard rejected file URLs ({})",
                other
            ))),
        }
    }
}

impl Default for OsaScript {
    fn default() -> Self {
        Self::new()
    }
}
