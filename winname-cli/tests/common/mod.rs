//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment with its own `HOME` and no `WINNAME_*` variables
//! - Helpers to write input and configuration files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would otherwise leak into the binary.
const ISOLATED_VARS: &[&str] = &[
    "WINNAME_CONFIG",
    "WINNAME_SHELLS",
    "WINNAME_DIR_PROGRAMS",
    "WINNAME_MAX_NAME_LEN",
    "WINNAME_ICON_STYLE",
    "WINNAME_CONFLICT_POLICY",
    "WINNAME_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, also used as `HOME`
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the winname binary, isolated from the
    /// caller's configuration.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("winname").expect("Failed to find winname binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `content` to `name` under the temporary directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file, `~/.winname/config.yaml`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        self.write_file(".winname/config.yaml", content)
    }

    /// Run `winname label --format json` on `input` and return the labels in
    /// order.
    pub fn labels(&self, input: &str) -> Vec<String> {
        let output = self
            .command()
            .args(["label", "--format", "json"])
            .write_stdin(input)
            .output()
            .expect("Failed to run label command");

        assert!(
            output.status.success(),
            "label failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let parsed: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output is not JSON");
        parsed
            .as_array()
            .expect("Output is not an array")
            .iter()
            .map(|item| item["label"].as_str().unwrap().to_string())
            .collect()
    }
}
