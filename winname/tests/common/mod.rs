//! Common test utilities for integration tests.
//!
//! This module provides helpers for building labelling inputs and for
//! isolating tests that touch the process environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use winname::{disambiguate, PathEntry};

/// Every environment variable the configuration system reads.
#[allow(dead_code)]
pub const WINNAME_ENV_VARS: &[&str] = &[
    "WINNAME_SHELLS",
    "WINNAME_DIR_PROGRAMS",
    "WINNAME_MAX_NAME_LEN",
    "WINNAME_ICON_STYLE",
    "WINNAME_CONFLICT_POLICY",
];

/// Label `(path, group)` rows with the default policy and render the labels.
///
/// The row index is used as the context.
#[allow(dead_code)]
pub fn labels(rows: &[(&str, Option<&str>)]) -> Vec<String> {
    let entries = rows
        .iter()
        .enumerate()
        .map(|(i, (path, group))| PathEntry::parse(i, path, *group).unwrap())
        .collect();

    disambiguate(entries)
        .unwrap()
        .into_iter()
        .map(|label| label.display_string())
        .collect()
}

/// Check `(full_path, group, expected_label)` rows.
#[allow(dead_code)]
pub fn check(expected: &[(&str, Option<&str>, &str)]) {
    let rows: Vec<_> = expected.iter().map(|(p, g, _)| (*p, *g)).collect();
    let wanted: Vec<_> = expected.iter().map(|(_, _, l)| (*l).to_string()).collect();
    assert_eq!(labels(&rows), wanted, "input: {rows:?}");
}

/// Write `content` to `dir/filename` and return the path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear all `WINNAME_*` variables and point `HOME` at `home`, so that no
/// user configuration leaks into a test.
#[allow(dead_code)]
pub fn isolate_env(home: &Path) -> Vec<EnvGuard> {
    let mut guards: Vec<EnvGuard> = WINNAME_ENV_VARS.iter().map(|k| EnvGuard::remove(k)).collect();
    guards.push(EnvGuard::new("HOME", home));
    guards
}
