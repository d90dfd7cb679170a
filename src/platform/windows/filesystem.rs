//! Windows filesystem operations

use crate::platform::traits::FilesystemOps;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub struct WindowsFilesystem;

impl WindowsFilesystem {
    pub fn new() -> Self {
        Self
    }

    /// Extensions tried for bare command names, from PATHEXT when set
    fn executable_extensions() -> Vec<String> {
        match env::var("PATHEXT") {
            Ok(pathext) => pathext
                .split(';')
                .filter(|ext| !ext.is_empty())
                .map(|ext| ext.to_lowercase())
                .collect(),
            Err(_) => vec![
                ".exe".to_string(),
                ".bat".to_string(),
                ".cmd".to_string(),
                ".com".to_string(),
            ],
        }
    }
}

impl FilesystemOps for WindowsFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            matches!(
                ext.to_lowercase().as_str(),
                "exe" | "bat" | "cmd" | "ps1" | "com"
            )
        } else {
            false
        }
    }

    fn find_command_in(&self, command: &str, search_path: &OsStr) -> Option<PathBuf> {
        if command.is_empty() {
            return None;
        }

        let extensions = Self::executable_extensions();
        for dir in env::split_paths(search_path) {
            let bare = dir.join(command);
            if self.is_executable(&bare) {
                return Some(bare);
            }
            for ext in &extensions {
                let candidate = dir.join(format!("{}{}", command, ext));
                if self.is_executable(&candidate) {
                    return Some(candidate);
                }
            }
        }

        None
    }
}
