//! gnuplot-pipe - drive gnuplot from Rust through a pipe
//!
//! This library starts a gnuplot process, writes commands to its standard
//! input and stages numeric series as temporary data files that gnuplot
//! reads by path.
//!
//! ## Features
//!
//! - **Raw commands:** Any gnuplot command line, fire-and-forget
//! - **Data plots:** 1-D, 2-D and 3-D series, or a sampled function
//! - **Accumulating plots:** The first plot uses `plot`/`splot`, later ones `replot`
//! - **Styles and labels:** Validated plot styles, positional axis labels
//! - **Cleanup:** Staged files are removed on reset, close or drop
//! - **Configuration:** Optional TOML/JSON configuration files
//!
//! ## Module Organization
//!
//! - [`session`] - The [`Plotter`] session handle
//! - [`process`] - gnuplot process lifecycle and executable lookup
//! - [`staging`] - Temporary data file creation and cleanup
//! - [`commands`] - Plot statement and label command construction
//! - [`models`] - Styles, verbs, axes, process information
//! - [`config`] - Session configuration and file loading
//! - [`platform`] - PATH search and platform directories
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use gnuplot_pipe::Plotter;
//!
//! # fn main() -> gnuplot_pipe::Result<()> {
//! let mut p = Plotter::new("", false, false)?;
//! p.plot_x(&[10.0, 20.0, 30.0], "some data")?;
//! p.plot_func(&[0.0, 1.0, 2.0], |x| x * x, "square")?;
//! p.set_labels(&["x", "value"])?;
//! p.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Threading
//!
//! Everything is synchronous. A [`Plotter`] has no internal locking and
//! is driven by one caller at a time; separate sessions are independent.
//! Writes block until gnuplot's pipe accepts them.

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod platform;
pub mod process;
pub mod session;
pub mod staging;

// Re-exports for core functionality
pub use error::{Error, Result};
pub use session::Plotter;

// Convenience re-exports for common types
pub use commands::{CommandBuilder, Dims};
pub use config::loader::ConfigLoader;
pub use config::PlotterConfig;
pub use models::{Axis, PlotStyle, PlotVerb, ProcessInfo};
pub use process::{CommandSink, ProcessHandle};
pub use staging::TempFileStaging;

// Version information
/// The current version of gnuplot-pipe from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The library name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Start a session configured from the default configuration locations
///
/// Falls back to [`PlotterConfig::default`] when no file is found or the
/// file that was found cannot be used.
///
/// # Examples
///
/// ```no_run
/// match gnuplot_pipe::init() {
///     Ok(p) => println!("gnuplot session {}", p.id()),
///     Err(e) => eprintln!("{}", gnuplot_pipe::handle_startup_error(&e)),
/// }
/// ```
pub fn init() -> Result<Plotter> {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            PlotterConfig::default()
        }
    };

    Plotter::with_config(config)
}

/// Start a session from an explicit configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<Plotter> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let config = ConfigLoader::new().load_from_path(config_path)?;
    Plotter::with_config(config)
}

/// Human-readable explanation of a startup failure with hints
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ExecutableNotFound { program, reason } => {
            format!(
                "gnuplot Error: '{}' could not be found: {}\n\nTry:\n• Install gnuplot\n• Add its directory to PATH\n• Set `executable` in the configuration file",
                program, reason
            )
        }
        Error::SpawnFailed { command, reason } => {
            format!(
                "gnuplot Error: Failed to start '{}': {}\n\nTry:\n• Check the executable permissions\n• Run the command by hand to see its output",
                command, reason
            )
        }
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check configuration file syntax\n• Ensure file permissions are correct",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Ensure file is valid {}",
                format, reason, format
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}",
                field, reason
            )
        }
        Error::Io(err) => {
            format!(
                "I/O Error: {}\n\nTry:\n• Check file permissions\n• Verify disk space",
                err
            )
        }
        _ => format!("Unexpected Error: {}", error),
    }
}
