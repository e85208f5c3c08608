//! CLI definitions for the three executables.
//!
//! Kept in the library so xtask can generate man pages from the same
//! definitions the binaries parse.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Args, Parser};

use crate::clipboard::{ClipboardMethod, SystemClipboard};

/// Version string shown by `--version`, with the git commit for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles shared by all three commands.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Options every command accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonOptions {
    /// Clipboard backend to use instead of auto-detection
    #[arg(long, value_enum, value_name = "TOOL")]
    pub clipboard_tool: Option<ClipboardMethod>,

    /// Log more diagnostics to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonOptions {
    /// The system clipboard, honoring `--clipboard-tool`.
    pub fn clipboard(&self) -> SystemClipboard {
        match self.clipboard_tool {
            Some(method) => SystemClipboard::only(method),
            None => SystemClipboard::new(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "copy-files-to-clipboard")]
#[command(about = "Place file references on the system clipboard")]
#[command(long_about = "Place file references on the system clipboard.

Replaces the entire clipboard content with the given paths, in order, so
they can be pasted as files in another application. Paths that do not
exist are reported and skipped.

EXAMPLES:
    copy-files-to-clipboard report.pdf          Copy one file
    copy-files-to-clipboard src/ notes.txt      Copy a folder and a file

EXIT STATUS:
    0   the clipboard now holds every existing path
    1   no paths given, none exist, or the clipboard is unavailable")]
#[command(version = VERSION, styles = build_cli_styles())]
pub struct CopyFilesCli {
    #[command(flatten)]
    pub options: CommonOptions,

    /// Files or directories to place on the clipboard
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "paste-files-from-clipboard")]
#[command(about = "Copy the files and folders on the clipboard into a directory")]
#[command(long_about = "Copy the files and folders on the clipboard into a directory.

Each clipboard item is copied into TARGET_DIR under its own name; folders
are copied recursively. Anything already at a destination is replaced.
An item that fails to copy is reported on stderr and the remaining items
are still copied.

EXAMPLES:
    paste-files-from-clipboard ~/Downloads
    paste-files-from-clipboard --strict build/assets

EXIT STATUS:
    0   every item was processed (even if some failed, unless --strict)
    1   missing argument, no files on the clipboard, or --strict and an item failed")]
#[command(version = VERSION, styles = build_cli_styles())]
pub struct PasteFilesCli {
    #[command(flatten)]
    pub options: CommonOptions,

    /// Exit with status 1 if any item failed to copy
    #[arg(long)]
    pub strict: bool,

    /// Directory to copy the clipboard items into
    pub target_dir: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "extract-archive-from-clipboard")]
#[command(about = "Copy the archive on the clipboard into a directory and print its path")]
#[command(long_about = "Copy the archive on the clipboard into a directory and print its path.

Takes the first file on the clipboard, copies it into TARGET_DIR under its
own name (replacing anything already there) and prints the absolute path
of the copy on stdout. Other clipboard items are ignored. The archive is
not unpacked.

EXAMPLE:
    extract-archive-from-clipboard ~/src

EXIT STATUS:
    0   the path of the copy was printed
    1   missing argument, TARGET_DIR is not a directory, empty clipboard, or copy failed")]
#[command(version = VERSION, styles = build_cli_styles())]
pub struct ExtractArchiveCli {
    #[command(flatten)]
    pub options: CommonOptions,

    /// Existing directory to copy the archive into
    pub target_dir: PathBuf,
}
