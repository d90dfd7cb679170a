//! Platform-specific operation traits
//!
//! These traits define the interface for platform-specific operations,
//! allowing for clean abstraction and easier testing.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Platform-specific filesystem operations
pub trait FilesystemOps: Send + Sync {
    /// Check if a file is executable
    fn is_executable(&self, path: &Path) -> bool;

    /// Find a command in the directories of the given search path
    fn find_command_in(&self, command: &str, search_path: &std::ffi::OsStr) -> Option<PathBuf>;

    /// Find a command in PATH
    fn find_command(&self, command: &str) -> Result<Option<PathBuf>> {
        match std::env::var_os("PATH") {
            Some(search_path) => Ok(self.find_command_in(command, &search_path)),
            None => Ok(None),
        }
    }
}

/// Platform-specific path operations
pub trait PathOps: Send + Sync {
    /// Get configuration directory
    fn config_dir(&self) -> Result<PathBuf>;

    /// Get the directory temporary data files are created in
    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}
