//! Location of the files deptask keeps between runs.

use anyhow::Result;
use std::env::{self, consts::OS};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "deptask";

/// Per-user data directory: `$XDG_DATA_HOME/deptask` (or
/// `~/.local/share/deptask`) on Linux, `~/Library/Application Support/deptask`
/// on macOS and `%LOCALAPPDATA%\deptask` on Windows.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        Self {
            base_path: data_home().join(APP_NAME),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` in the data directory. The directory is created
    /// on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }
}

fn data_home() -> PathBuf {
    let var = |name: &str| env::var_os(name).filter(|value| !value.is_empty()).map(PathBuf::from);
    let home = || var("HOME").unwrap_or_else(|| PathBuf::from("."));

    match OS {
        "windows" => var("LOCALAPPDATA").unwrap_or_else(|| PathBuf::from(".")),
        "macos" => home().join("Library").join("Application Support"),
        _ => var("XDG_DATA_HOME").unwrap_or_else(|| home().join(".local").join("share")),
    }
}
