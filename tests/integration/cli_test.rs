//! Binary-level tests for the three executables.
//!
//! Only paths that fail or finish before the clipboard is touched are
//! exercised here, so these tests never read or overwrite the real
//! system clipboard.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::Workspace;

fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("binary should be built");
    cmd.env("NO_COLOR", "1");
    cmd
}

mod copy_files_to_clipboard {
    use super::*;

    #[test]
    fn no_arguments_exits_1() {
        bin("copy-files-to-clipboard")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr("No files provided\n");
    }

    #[test]
    fn all_missing_reports_each_path_then_fails() {
        let ws = Workspace::new();
        let one = ws.root().join("one.txt");
        let two = ws.root().join("two.txt");

        bin("copy-files-to-clipboard")
            .arg(&one)
            .arg(&two)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(format!(
                "File not found: {}\nFile not found: {}\nNo valid files to copy\n",
                one.display(),
                two.display()
            ));
    }

    #[test]
    fn help_exits_0() {
        bin("copy-files-to-clipboard")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("file references"));
    }

    #[test]
    fn unknown_clipboard_tool_is_a_usage_error() {
        bin("copy-files-to-clipboard")
            .args(["--clipboard-tool", "pbcopy", "x"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--clipboard-tool"));
    }
}

mod paste_files_from_clipboard {
    use super::*;

    #[test]
    fn missing_target_prints_usage_and_exits_1() {
        bin("paste-files-from-clipboard")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage:"))
            .stderr(predicate::str::contains("TARGET_DIR"));
    }

    #[test]
    fn version_exits_0() {
        bin("paste-files-from-clipboard")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("paste-files-from-clipboard "));
    }
}

mod extract_archive_from_clipboard {
    use super::*;

    #[test]
    fn missing_target_prints_usage_and_exits_1() {
        bin("extract-archive-from-clipboard")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage:"));
    }

    #[test]
    fn nonexistent_target_directory_exits_1() {
        let ws = Workspace::new();
        let missing = ws.root().join("nope");

        bin("extract-archive-from-clipboard")
            .arg(&missing)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(format!(
                "Target directory does not exist: {}\n",
                missing.display()
            ));
    }

    #[test]
    fn target_that_is_a_file_exits_1() {
        let ws = Workspace::new();
        let file = ws.source_file("not-a-dir.txt", "x");

        bin("extract-archive-from-clipboard")
            .arg(&file)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::starts_with("Target directory does not exist"));
    }
}
