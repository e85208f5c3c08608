//! Integration tests for the clipboard module.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use yank_system_ops::clipboard::tool::{ClipboardTool, ToolError};
use yank_system_ops::clipboard::{ClipboardError, ClipboardMethod, SystemClipboard};
use yank_system_ops::platform::Clipboard;

/// A mock tool for testing the SystemClipboard orchestrator.
struct MockTool {
    method: ClipboardMethod,
    available: bool,
    read_result: Result<Vec<PathBuf>, ToolError>,
    write_result: Result<(), ToolError>,
    written: Arc<Mutex<Vec<Vec<PathBuf>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockTool {
    fn new(method: ClipboardMethod) -> Self {
        Self {
            method,
            available: true,
            read_result: Ok(Vec::new()),
            write_result: Ok(()),
            written: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    fn read_result(mut self, result: Result<Vec<PathBuf>, ToolError>) -> Self {
        self.read_result = result;
        self
    }

    fn write_result(mut self, result: Result<(), ToolError>) -> Self {
        self.write_result = result;
        self
    }
}

impl ClipboardTool for MockTool {
    fn method(&self) -> ClipboardMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn read_paths(&self) -> Result<Vec<PathBuf>, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.read_result.clone()
    }

    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.write_result.is_ok() {
            self.written.lock().unwrap().push(paths.to_vec());
        }
        self.write_result.clone()
    }
}

#[test]
fn default_name_implementation_uses_method_name() {
    let tool = MockTool::new(ClipboardMethod::Xclip);
    assert_eq!(tool.name(), "xclip");
}

#[test]
fn with_tools_accepts_empty_vec() {
    let clipboard = SystemClipboard::with_tools(vec![]);
    assert!(clipboard.tools().is_empty());
}

#[test]
fn no_tools_means_no_tool_available() {
    let clipboard = SystemClipboard::with_tools(vec![]);
    assert!(matches!(
        clipboard.read_paths(),
        Err(ClipboardError::NoToolAvailable)
    ));
    assert!(matches!(
        clipboard.write_paths(&[PathBuf::from("/a")]),
        Err(ClipboardError::NoToolAvailable)
    ));
}

#[test]
fn read_returns_first_successful_tool_result() {
    let tool = MockTool::new(ClipboardMethod::OsaScript)
        .read_result(Ok(vec![PathBuf::from("/x"), PathBuf::from("/y")]));
    let clipboard = SystemClipboard::with_tools(vec![Box::new(tool)]);

    assert_eq!(
        clipboard.read_paths().unwrap(),
        vec![PathBuf::from("/x"), PathBuf::from("/y")]
    );
}

#[test]
fn unavailable_tools_are_never_called() {
    let skipped = MockTool::new(ClipboardMethod::WlClipboard).available(false);
    let skipped_calls = Arc::clone(&skipped.calls);
    let used = MockTool::new(ClipboardMethod::Xclip).read_result(Ok(vec![PathBuf::from("/a")]));
    let clipboard = SystemClipboard::with_tools(vec![Box::new(skipped), Box::new(used)]);

    assert_eq!(clipboard.read_paths().unwrap(), vec![PathBuf::from("/a")]);
    assert_eq!(skipped_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn failing_tool_falls_through_to_next() {
    let broken = MockTool::new(ClipboardMethod::WlClipboard)
        .write_result(Err(ToolError::Failed("no display".to_string())));
    let working = MockTool::new(ClipboardMethod::Xclip);
    let written = Arc::clone(&working.written);
    let clipboard = SystemClipboard::with_tools(vec![Box::new(broken), Box::new(working)]);

    clipboard
        .write_paths(&[PathBuf::from("/b"), PathBuf::from("/a")])
        .unwrap();

    assert_eq!(
        *written.lock().unwrap(),
        vec![vec![PathBuf::from("/b"), PathBuf::from("/a")]]
    );
}

#[test]
fn not_found_tool_is_skipped_silently() {
    let missing = MockTool::new(ClipboardMethod::Xclip).read_result(Err(ToolError::NotFound));
    let clipboard = SystemClipboard::with_tools(vec![Box::new(missing)]);

    assert!(matches!(
        clipboard.read_paths(),
        Err(ClipboardError::NoToolAvailable)
    ));
}

#[test]
fn last_failure_is_reported_when_all_tools_fail() {
    let first = MockTool::new(ClipboardMethod::WlClipboard)
        .read_result(Err(ToolError::Failed("first".to_string())));
    let second = MockTool::new(ClipboardMethod::Xclip)
        .read_result(Err(ToolError::Failed("second".to_string())));
    let clipboard = SystemClipboard::with_tools(vec![Box::new(first), Box::new(second)]);

    match clipboard.read_paths() {
        Err(ClipboardError::ToolFailed { tool, message }) => {
            assert_eq!(tool, ClipboardMethod::Xclip);
            assert_eq!(message, "second");
        }
        other => panic!("expected ToolFailed, got {:?}", other),
    }
}

#[test]
fn tool_failed_message_names_the_tool() {
    let error = ClipboardError::ToolFailed {
        tool: ClipboardMethod::OsaScript,
        message: "denied".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("osascript"));
    assert!(msg.contains("denied"));
}

#[test]
fn no_tool_available_has_helpful_linux_message() {
    let msg = ClipboardError::NoToolAvailable.to_string();
    assert!(msg.contains("xclip") && msg.contains("wl-clipboard"));
}

#[test]
fn only_restricts_to_requested_backend() {
    let clipboard = SystemClipboard::only(ClipboardMethod::Xclip);
    assert_eq!(clipboard.tools().len(), 1);
    assert_eq!(clipboard.tools()[0].method(), ClipboardMethod::Xclip);
}
