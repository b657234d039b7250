// tests/common/fixtures.rs
use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary directory tree for end-to-end listings.
pub struct Tree {
    dir: TempDir,
}

#[allow(dead_code)]
impl Tree {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Sets the mtime of `rel` to `secs` after the Unix epoch.
    pub fn touch_at(&self, rel: &str, secs: u64) {
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
        fs::File::options().write(true).open(self.dir.path().join(rel)).unwrap().set_modified(when).unwrap();
    }
}

pub fn dirlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirlist"))
}

/// Runs the binary and returns stdout, asserting success.
pub fn list_ok(args: &[&str], path: &Path) -> String {
    let output = dirlist().args(args).arg(path).output().expect("run dirlist");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

/// Last field of every metadata line (headers and blank lines skipped).
pub fn names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
        .filter_map(|line| line.rsplit(' ').next())
        .map(str::to_string)
        .collect()
}
