//! Windows path operations

use crate::error::{Error, Result};
use crate::platform::traits::PathOps;
use std::path::PathBuf;

pub struct WindowsPaths;

impl WindowsPaths {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for WindowsPaths {
    fn config_dir(&self) -> Result<PathBuf> {
        // Use AppData\Roaming on Windows
        if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir)
        } else {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )))
        }
    }
}
