//! Shared testing utilities for siteforge integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `siteforge` binary inside the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("siteforge").expect("Failed to locate siteforge binary");
        cmd.current_dir(&self.work_dir).env_remove("SITEFORGE_LOG");
        cmd
    }

    /// Copy a fixture from `tests/fixtures` into the work directory and return its path.
    pub fn fixture(&self, name: &str) -> PathBuf {
        let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
        let target = self.work_dir.join(name);
        fs::copy(&source, &target).expect("Failed to copy fixture");
        target
    }

    /// Write an ad-hoc config file into the work directory.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read generated file")
    }

    pub fn assert_exists(&self, relative: impl AsRef<Path>) {
        let path = self.work_dir.join(relative);
        assert!(path.exists(), "{} should exist", path.display());
    }
}
