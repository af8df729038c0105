//! Process environment port interface

use std::path::{Path, PathBuf};

/// Port for reading the process environment and filesystem presence
pub trait Environment: Send + Sync {
    /// Value of an environment variable, if set and valid UTF-8
    fn var(&self, key: &str) -> Option<String>;

    /// Whether a regular file exists at `path`
    fn file_exists(&self, path: &Path) -> bool;

    /// Directory holding the running executable
    fn exe_dir(&self) -> Option<PathBuf>;
}
