//! Configuration management for gnuplot-pipe
//!
//! Session defaults can come from code, or from a TOML/JSON file found
//! by [`loader::ConfigLoader`].

pub mod loader;

use crate::models::{PlotStyle, PlotVerb};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix every staged data file carries so stray files are identifiable
pub const DEFAULT_FILE_PREFIX: &str = "go-gnuplot-";

/// Name of the plotting program looked up on PATH
pub const DEFAULT_PROGRAM: &str = "gnuplot";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    /// Start gnuplot with `-persist` so windows outlive the process
    pub persist: bool,

    /// Echo every command and its byte count
    pub debug: bool,

    /// Explicit executable; when unset, `gnuplot` is looked up on PATH
    pub executable: Option<PathBuf>,

    /// Directory for staged data files; defaults to the OS temp dir
    pub temp_dir: Option<PathBuf>,

    /// File name prefix of staged data files
    pub file_prefix: String,

    /// Initial plotting style
    pub style: PlotStyle,

    /// Initial plot command verb
    pub plot_command: PlotVerb,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            persist: false,
            debug: false,
            executable: None,
            temp_dir: None,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            style: PlotStyle::default(),
            plot_command: PlotVerb::default(),
        }
    }
}

impl PlotterConfig {
    /// Configuration equivalent to `Plotter::new("", persist, debug)`
    pub fn new(persist: bool, debug: bool) -> Self {
        Self {
            persist,
            debug,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_prefix.is_empty() {
            return Err(ConfigError::EmptyFilePrefix);
        }

        if self
            .file_prefix
            .chars()
            .any(|c| std::path::is_separator(c) || c == '\0')
        {
            return Err(ConfigError::InvalidFilePrefix(self.file_prefix.clone()));
        }

        if let Some(executable) = &self.executable {
            if executable.as_os_str().is_empty() {
                return Err(ConfigError::InvalidExecutable(executable.clone()));
            }
        }

        if let Some(dir) = &self.temp_dir {
            if !dir.is_dir() {
                return Err(ConfigError::TempDirNotFound(dir.clone()));
            }
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("File prefix cannot be empty")]
    EmptyFilePrefix,

    #[error("Invalid file prefix: {0:?} (must not contain path separators)")]
    InvalidFilePrefix(String),

    #[error("Invalid executable path: {0:?}")]
    InvalidExecutable(PathBuf),

    #[error("Temp directory not found: {0}")]
    TempDirNotFound(PathBuf),
}

impl ConfigError {
    /// Name of the offending configuration field
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::EmptyFilePrefix | ConfigError::InvalidFilePrefix(_) => "file_prefix",
            ConfigError::InvalidExecutable(_) => "executable",
            ConfigError::TempDirNotFound(_) => "temp_dir",
        }
    }
}
