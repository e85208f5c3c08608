//! Platform clipboard backends.

pub mod osascript;
pub mod wl_clipboard;
pub mod xclip;

pub use osascript::OsaScript;
pub use wl_clipboard::WlClipboard;
pub use xclip::Xclip;

use super::method::ClipboardMethod;
use super::tool::{ClipboardTool, ToolError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Tools for the current platform, in priority order.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    if cfg!(target_os = "macos") {
        vec![Box::new(OsaScript::new())]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        vec![Box::new(WlClipboard::new()), Box::new(Xclip::new())]
    } else {
        vec![Box::new(Xclip::new()), Box::new(WlClipboard::new())]
    }
}

/// The tool for one specific backend.
pub fn tool_for(method: ClipboardMethod) -> Box<dyn ClipboardTool> {
    match method {
        ClipboardMethod::OsaScript => Box::new(OsaScript::new()),
        ClipboardMethod::Xclip => Box::new(Xclip::new()),
        ClipboardMethod::WlClipboard => Box::new(WlClipboard::new()),
    }
}

/// Check if a program is on PATH.
pub(crate) fn program_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run a clipboard writer, feeding `input` on stdin.
///
/// xclip and wl-copy fork a process that keeps serving the selection, so
/// stdout and stderr are detached to avoid holding the caller's pipes open.
pub(crate) fn pipe_into(program: &str, args: &[&str], input: &str) -> Result<(), ToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(ToolError::from_spawn)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|e| ToolError::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| ToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed(format!("{} exited with {}", program, status)))
    }
}

/// Run a clipboard reader and return its stdout.
///
/// Returns `Ok(None)` when the reader reports that the clipboard holds
/// nothing in the requested format.
pub(crate) fn read_from(
    program: &str,
    args: &[&str],
    empty_markers: &[&str],
) -> Result<Option<String>, ToolError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(ToolError::from_spawn)?;

    if output.status.success() {
        return Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if empty_markers.iter().any(|m| stderr.contains(m)) {
        Ok(None)
    } else {
        Err(ToolError::Failed(stderr.trim().to_string()))
    }
}
