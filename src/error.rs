//! Error types and Result aliases for gnuplot-pipe

use std::fmt;
use std::path::PathBuf;

/// Result type alias for gnuplot-pipe operations
pub type Result<T> = std::result::Result<T, Error>;

/// A single temp file that could not be removed during cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Main error type for gnuplot-pipe
#[derive(Debug)]
pub enum Error {
    // === Spawn errors ===
    /// The gnuplot executable could not be found on PATH
    ExecutableNotFound {
        program: String,
        reason: String,
    },

    /// The process could not be started
    SpawnFailed {
        command: String,
        reason: String,
    },

    /// The child was started but its stdin pipe was not available
    StdinUnavailable {
        command: String,
    },

    // === Write errors ===
    /// Writing a command line to gnuplot's stdin failed
    CommandWriteFailed {
        command: String,
        reason: String,
    },

    /// The command channel was already closed
    SessionClosed,

    // === Staging errors ===
    /// Creating or writing a temporary data file failed
    StagingFailed {
        path: Option<PathBuf>,
        reason: String,
    },

    // === Caller input errors ===
    /// Wrong number of series or labels (valid range is 1..=3)
    InvalidDimension {
        count: usize,
    },

    /// Style name outside the recognized set
    InvalidStyle {
        style: String,
    },

    /// Plot command other than `plot` or `splot`
    InvalidPlotCommand {
        command: String,
    },

    // === Close errors ===
    /// gnuplot exited abnormally
    ProcessExitFailed {
        command: String,
        status: String,
    },

    /// One or more temp files could not be removed
    CleanupFailed {
        failures: Vec<CleanupFailure>,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    /// Failed to serialize configuration for saving
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    /// I/O errors
    Io(std::io::Error),
}

impl Error {
    /// Spawn-class errors mean the whole capability is unavailable
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ExecutableNotFound { .. }
                | Error::SpawnFailed { .. }
                | Error::StdinUnavailable { .. }
        )
    }

    /// Errors caused by caller input rather than by the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidDimension { .. }
                | Error::InvalidStyle { .. }
                | Error::InvalidPlotCommand { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Spawn errors
            Error::ExecutableNotFound { program, reason } => {
                write!(f, "Could not find '{}' on PATH: {}", program, reason)
            }
            Error::SpawnFailed { command, reason } => {
                write!(f, "Failed to spawn '{}': {}", command, reason)
            }
            Error::StdinUnavailable { command } => {
                write!(f, "Stdin of '{}' is not available", command)
            }

            // Write errors
            Error::CommandWriteFailed { command, reason } => {
                write!(f, "Failed to send command '{}': {}", command, reason)
            }
            Error::SessionClosed => {
                write!(f, "Command channel is already closed")
            }

            // Staging errors
            Error::StagingFailed { path, reason } => match path {
                Some(path) => write!(
                    f,
                    "Failed to stage data file '{}': {}",
                    path.display(),
                    reason
                ),
                None => write!(f, "Failed to create data file: {}", reason),
            },

            // Caller input errors
            Error::InvalidDimension { count } => {
                write!(f, "invalid number of dims '{}'", count)
            }
            Error::InvalidStyle { style } => {
                write!(f, "invalid style '{}'", style)
            }
            Error::InvalidPlotCommand { command } => {
                write!(f, "invalid plot cmd [{}]", command)
            }

            // Close errors
            Error::ProcessExitFailed { command, status } => {
                write!(f, "'{}' exited abnormally: {}", command, status)
            }
            Error::CleanupFailed { failures } => {
                write!(f, "Failed to remove {} temp file(s)", failures.len())?;
                for failure in failures {
                    write!(f, "; {}: {}", failure.path.display(), failure.reason)?;
                }
                Ok(())
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }

            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Error::ConfigValidationFailed {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}
