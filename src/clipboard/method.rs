//! Clipboard backend identifiers.

use clap::ValueEnum;

/// The external program used to reach the system clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClipboardMethod {
    /// macOS `osascript` talking to `NSPasteboard`.
    #[value(name = "osascript")]
    OsaScript,
    /// X11 `xclip`.
    Xclip,
    /// Wayland `wl-copy` / `wl-paste`.
    #[value(name = "wl-clipboard")]
    WlClipboard,
}

impl ClipboardMethod {
    /// Human-readable name, matching the `--clipboard-tool` value.
    pub fn name(&self) -> &'static str {
        match self {
            ClipboardMethod::OsaScript => "osascript",
            ClipboardMethod::Xclip => "xclip",
            ClipboardMethod::WlClipboard => "wl-clipboard",
        }
    }
}

impl std::fmt::Display for ClipboardMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
