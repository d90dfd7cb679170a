//! gnuplot executable discovery
//!
//! The PATH lookup for `gnuplot` runs at most once per process. The
//! outcome, found or not, is cached for the process lifetime, so a
//! missing installation is reported the same way on every attempt to
//! start a session.

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_PROGRAM;
use crate::error::{Error, Result};
use crate::platform::Platform;

static GNUPLOT_PATH: Lazy<std::result::Result<PathBuf, String>> = Lazy::new(|| {
    match find_program(DEFAULT_PROGRAM) {
        Ok(path) => {
            info!("found gnuplot command: {}", path.display());
            Ok(path)
        }
        Err(e) => {
            error!("could not find path to '{}': {}", DEFAULT_PROGRAM, e);
            Err(e.to_string())
        }
    }
});

/// Cached location of `gnuplot` on PATH
pub fn gnuplot_path() -> Result<&'static Path> {
    match &*GNUPLOT_PATH {
        Ok(path) => Ok(path.as_path()),
        Err(reason) => Err(Error::ExecutableNotFound {
            program: DEFAULT_PROGRAM.to_string(),
            reason: reason.clone(),
        }),
    }
}

/// Uncached PATH lookup of an arbitrary program
pub fn find_program(program: &str) -> Result<PathBuf> {
    match Platform::filesystem().find_command(program)? {
        Some(path) => Ok(path),
        None => Err(Error::ExecutableNotFound {
            program: program.to_string(),
            reason: "executable file not found in $PATH".to_string(),
        }),
    }
}

/// Resolve an explicit executable: bare names go through PATH, paths
/// must point at an executable file
pub fn resolve_executable(executable: &Path) -> Result<PathBuf> {
    let fs_ops = Platform::filesystem();
    if executable.components().count() > 1 || executable.is_absolute() {
        if fs_ops.is_executable(executable) {
            Ok(executable.to_path_buf())
        } else {
            Err(Error::ExecutableNotFound {
                program: executable.display().to_string(),
                reason: "not an executable file".to_string(),
            })
        }
    } else {
        find_program(&executable.to_string_lossy())
    }
}
