//! Capabilities the operations need from the operating system.
//!
//! The three operations only ever talk to the clipboard and the filesystem
//! through these traits, so tests can swap in [`MemoryClipboard`] instead of
//! touching the real system clipboard.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::clipboard::ClipboardError;

/// Whole-clipboard access to file references.
pub trait Clipboard {
    /// Every file reference on the clipboard, in clipboard order.
    fn read_paths(&self) -> Result<Vec<PathBuf>, ClipboardError>;

    /// Replace the entire clipboard content with `paths`.
    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ClipboardError>;
}

/// The filesystem calls the operations make.
pub trait Filesystem {
    /// Whether something exists at `path` (symlinks are followed).
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Delete the file, symlink, or directory tree at `path`.
    fn remove_item(&self, path: &Path) -> io::Result<()>;

    /// Copy a file, symlink, or directory tree to `to`, which must not exist.
    fn copy_item(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Whether `a` and `b` name the same existing file.
    fn same_file(&self, a: &Path, b: &Path) -> bool;
}

/// The real local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_item(&self, path: &Path) -> io::Result<()> {
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn copy_item(&self, from: &Path, to: &Path) -> io::Result<()> {
        if let (Ok(from_real), Some(Ok(parent_real))) = (
            fs::canonicalize(from),
            to.parent().map(fs::canonicalize),
        ) {
            if from.is_dir() && parent_real.starts_with(&from_real) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("cannot copy {} into itself", from.display()),
                ));
            }
        }
        copy_recursive(from, to)
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (resolve_parent(a), resolve_parent(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Canonical location of the directory entry at `path` itself.
///
/// Only the parent is resolved, so a symlink names its own entry and never
/// the file it points to.
fn resolve_parent(path: &Path) -> Option<PathBuf> {
    fs::symlink_metadata(path).ok()?;
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(fs::canonicalize(parent).ok()?.join(name))
}

fn copy_recursive(from: &Path, to: &Path) -> io::Result<()> {
    if fs::symlink_metadata(to).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }

    let meta = fs::symlink_metadata(from)?;
    let file_type = meta.file_type();

    if file_type.is_symlink() {
        copy_symlink(from, to)
    } else if file_type.is_dir() {
        fs::create_dir(to)?;
        for entry in fs::read_dir(from)? {
            let entry = entry?;
            copy_recursive(&entry.path(), &to.join(entry.file_name()))?;
        }
        fs::set_permissions(to, meta.permissions())
    } else {
        fs::copy(from, to).map(|_| ())
    }
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
}

/// In-memory clipboard for tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    paths: RefCell<Vec<PathBuf>>,
    writes: Cell<usize>,
    unavailable: bool,
}

impl MemoryClipboard {
    /// An empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard already holding `paths`.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: RefCell::new(paths.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A clipboard whose every access fails as if no tool were installed.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Current content.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.paths.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_paths(&self) -> Result<Vec<PathBuf>, ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError::NoToolAvailable);
        }
        Ok(self.paths())
    }

    fn write_paths(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError::NoToolAvailable);
        }
        *self.paths.borrow_mut() = paths.to_vec();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
