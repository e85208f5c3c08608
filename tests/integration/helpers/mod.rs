//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch area with a `source/` tree and an empty `target/` directory.
pub struct Workspace {
    pub temp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp.path().join("source")).expect("Failed to create source dir");
        fs::create_dir_all(temp.path().join("target")).expect("Failed to create target dir");
        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn source(&self) -> PathBuf {
        self.root().join("source")
    }

    pub fn target(&self) -> PathBuf {
        self.root().join("target")
    }

    /// Write a file under `source/`, creating parent directories.
    pub fn source_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.source().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write source file");
        path
    }

    /// Read a file under `target/`.
    pub fn target_content(&self, relative: &str) -> String {
        fs::read_to_string(self.target().join(relative))
            .unwrap_or_else(|_| panic!("Missing target file: {}", relative))
    }
}
