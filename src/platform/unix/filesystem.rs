//! Unix filesystem operations

use crate::platform::traits::FilesystemOps;
use std::ffi::OsStr;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct UnixFilesystem;

impl UnixFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOps for UnixFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        if let Ok(metadata) = path.metadata() {
            if metadata.is_file() {
                return (metadata.permissions().mode() & 0o111) != 0;
            }
        }
        false
    }

    fn find_command_in(&self, command: &str, search_path: &OsStr) -> Option<PathBuf> {
        if command.is_empty() {
            return None;
        }

        // Names with a separator are taken as paths, like execvp does
        if command.contains('/') {
            let path = PathBuf::from(command);
            return self.is_executable(&path).then_some(path);
        }

        std::env::split_paths(search_path)
            .map(|dir| {
                // An empty PATH entry means the current directory
                if dir.as_os_str().is_empty() {
                    PathBuf::from(".").join(command)
                } else {
                    dir.join(command)
                }
            })
            .find(|candidate| self.is_executable(candidate))
    }
}
