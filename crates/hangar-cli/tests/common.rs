//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    work_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let work_dir = temp_dir.path().join("work");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            work_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory the tests register and scan.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hangar").expect("binary builds");
        cmd.env("HANGAR_DATA_DIR", &self.data_dir);
        cmd
    }

    /// Write a config.toml that pins Unity editor discovery to an empty
    /// directory, so a real install on the test machine is never found.
    pub fn isolate_tool_discovery(&self) {
        let empty = self.data_dir.join("no-editors");
        fs::create_dir_all(&empty).expect("Failed to create empty editor dir");
        fs::write(
            self.data_dir.join("config.toml"),
            format!(
                "[options]\n\"unity.editor.dir\" = '{}'\n",
                empty.display()
            ),
        )
        .expect("Failed to write config");
    }

    pub fn add_work_dir(&self) {
        self.command()
            .arg("folder")
            .arg("add")
            .arg(self.work_dir.to_str().unwrap())
            .assert()
            .success();
    }
}
