//! Plotting sessions
//!
//! A [`Plotter`] is one live gnuplot process plus the state that shapes
//! the commands sent to it: the plot verb, the current style, how many
//! plots were issued since the last reset, and the temp files backing
//! them.
//!
//! ## Usage
//!
//! ```no_run
//! use gnuplot_pipe::Plotter;
//!
//! # fn main() -> gnuplot_pipe::Result<()> {
//! let mut p = Plotter::new("", false, false)?;
//! p.plot_x(&[10.0, 20.0, 30.0], "my title")?;
//! p.set_labels(&["time", "value"])?;
//! p.cmd(format_args!("set title '{}'", "demo"))?;
//! p.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! A session is a plain mutable value with no internal locking; every
//! mutating call takes `&mut self`. Dropping a session without calling
//! [`close`](Plotter::close) still closes gnuplot and removes its files.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::commands::{CommandBuilder, Dims};
use crate::config::PlotterConfig;
use crate::error::{Error, Result};
use crate::models::{Axis, PlotStyle, PlotVerb, ProcessInfo};
use crate::platform::Platform;
use crate::process::{resolve_executable, start_args, CommandSink, ProcessHandle};
use crate::staging::TempFileStaging;

/// Handle to a gnuplot session, forwarding commands through a
/// [`CommandSink`] (a real gnuplot process by default)
#[derive(Debug)]
pub struct Plotter<S: CommandSink = ProcessHandle> {
    id: String,
    sink: S,
    debug: bool,
    plot_cmd: PlotVerb,
    nplots: usize,
    style: PlotStyle,
    staging: TempFileStaging,
    closed: bool,
}

impl Plotter<ProcessHandle> {
    /// Start a new gnuplot session
    ///
    /// - `command_file` is reserved for a future batch-script mode and
    ///   must be empty
    /// - `persist` starts gnuplot with `-persist` so plot windows stay
    ///   open after the session ends
    /// - `debug` echoes every command and its byte count as `cmd> ...`
    ///   and `res> ...` events at `info` level through `tracing`; nothing
    ///   is printed unless the caller installs a subscriber (for example
    ///   `tracing_subscriber::fmt::init()`)
    ///
    /// # Panics
    ///
    /// Panics if `command_file` is not empty.
    pub fn new(command_file: &str, persist: bool, debug: bool) -> Result<Self> {
        if !command_file.is_empty() {
            panic!("Plotter with a command file is not yet supported");
        }
        Self::with_config(PlotterConfig::new(persist, debug))
    }

    /// Start a session from a full configuration
    pub fn with_config(config: PlotterConfig) -> Result<Self> {
        config.validate()?;

        let handle = match &config.executable {
            Some(executable) => {
                let program = resolve_executable(executable)?;
                ProcessHandle::spawn_program(&program, &start_args(config.persist), config.debug)?
            }
            None => ProcessHandle::start(config.persist, config.debug)?,
        };

        Ok(Self::with_sink(handle, &config))
    }

    /// Lifecycle information of the gnuplot process
    pub fn process_info(&self) -> &ProcessInfo {
        self.sink.info()
    }
}

impl<S: CommandSink> Plotter<S> {
    /// Build a session over an already open command sink
    pub fn with_sink(sink: S, config: &PlotterConfig) -> Self {
        let temp_dir = config
            .temp_dir
            .clone()
            .unwrap_or_else(|| Platform::paths().temp_dir());
        let id = Uuid::new_v4().to_string();
        debug!("[{}] session started", id);

        Self {
            id,
            sink,
            debug: config.debug,
            plot_cmd: config.plot_command,
            nplots: 0,
            style: config.style,
            staging: TempFileStaging::with_location(temp_dir, config.file_prefix.clone()),
            closed: false,
        }
    }

    /// Send a raw command line
    ///
    /// Accepts anything displayable, including `format_args!`:
    ///
    /// ```no_run
    /// # let mut p = gnuplot_pipe::Plotter::new("", false, false).unwrap();
    /// p.cmd("set terminal pdf")?;
    /// p.cmd(format_args!("plot {}*x", 23.0))?;
    /// # Ok::<(), gnuplot_pipe::Error>(())
    /// ```
    pub fn cmd(&mut self, command: impl Display) -> Result<()> {
        let line = command.to_string();
        self.sink.send_line(&line)?;
        Ok(())
    }

    /// Fail-fast variant of [`cmd`](Self::cmd)
    ///
    /// # Panics
    ///
    /// Panics if the command could not be sent. Meant for scripts and
    /// demos where a broken gnuplot pipe is not worth recovering from.
    pub fn checked_cmd(&mut self, command: impl Display) {
        if let Err(err) = self.cmd(command) {
            error!("[{}] command failed: {}", self.id, err);
            panic!("** err: {}", err);
        }
    }

    /// Plot 1, 2 or 3 parallel series
    ///
    /// Any other count fails with [`Error::InvalidDimension`] before a
    /// file is written.
    pub fn plot_nd(&mut self, title: &str, data: &[&[f64]]) -> Result<()> {
        match Dims::from_count(data.len())? {
            Dims::One => self.plot_x(data[0], title),
            Dims::Two => self.plot_xy(data[0], data[1], title),
            Dims::Three => self.plot_xyz(data[0], data[1], data[2], title),
        }
    }

    /// 2-D plot of `data`, gnuplot using each value's index as x
    pub fn plot_x(&mut self, data: &[f64], title: &str) -> Result<()> {
        let path = self.staging.stage_x(data)?;
        self.plot_staged(&path, Dims::One, title)
    }

    /// 2-D plot of `y` against `x`
    pub fn plot_xy(&mut self, x: &[f64], y: &[f64], title: &str) -> Result<()> {
        let path = self.staging.stage_xy(x, y)?;
        self.plot_staged(&path, Dims::Two, title)
    }

    /// 3-D plot; the first plot of a session always uses `splot`
    pub fn plot_xyz(&mut self, x: &[f64], y: &[f64], z: &[f64], title: &str) -> Result<()> {
        let path = self.staging.stage_xyz(x, y, z)?;
        self.plot_staged(&path, Dims::Three, title)
    }

    /// 2-D plot of `f(x)` sampled at `xs`
    pub fn plot_func<F>(&mut self, xs: &[f64], f: F, title: &str) -> Result<()>
    where
        F: Fn(f64) -> f64,
    {
        let path = self.staging.stage_fn(xs, f)?;
        self.plot_staged(&path, Dims::Two, title)
    }

    fn plot_staged(&mut self, path: &Path, dims: Dims, title: &str) -> Result<()> {
        let keyword = CommandBuilder::keyword(self.plot_cmd, dims, self.nplots);
        let line = CommandBuilder::plot_statement(keyword, path, title, self.style);
        // Counted once the command is on its way, whether or not the write succeeds
        self.nplots += 1;
        self.cmd(line)
    }

    /// Change the verb used for the first plot (`plot` or `splot`)
    ///
    /// Anything else is rejected and leaves the verb unchanged.
    pub fn set_plot_cmd(&mut self, cmd: &str) -> Result<()> {
        self.plot_cmd = cmd.parse()?;
        Ok(())
    }

    /// Typed form of [`set_plot_cmd`](Self::set_plot_cmd)
    pub fn set_plot_verb(&mut self, verb: PlotVerb) {
        self.plot_cmd = verb;
    }

    /// Change the plotting style by name
    ///
    /// An unrecognized name still changes the style: it falls back to
    /// `points`, and the error is returned afterwards.
    pub fn set_style(&mut self, style: &str) -> Result<()> {
        match PlotStyle::from_name(style) {
            Some(parsed) => {
                self.style = parsed;
                Ok(())
            }
            None => {
                warn!(
                    "style '{}' not in allowed list {:?}, default to '{}'",
                    style,
                    PlotStyle::names(),
                    PlotStyle::Points
                );
                self.style = PlotStyle::Points;
                Err(Error::InvalidStyle {
                    style: style.to_string(),
                })
            }
        }
    }

    /// Typed form of [`set_style`](Self::set_style)
    pub fn set_plot_style(&mut self, style: PlotStyle) {
        self.style = style;
    }

    pub fn set_x_label(&mut self, label: &str) -> Result<()> {
        self.set_axis_label(Axis::X, label)
    }

    pub fn set_y_label(&mut self, label: &str) -> Result<()> {
        self.set_axis_label(Axis::Y, label)
    }

    pub fn set_z_label(&mut self, label: &str) -> Result<()> {
        self.set_axis_label(Axis::Z, label)
    }

    /// Send `set <axis>label '<label>'`; the label is not escaped
    pub fn set_axis_label(&mut self, axis: Axis, label: &str) -> Result<()> {
        self.cmd(CommandBuilder::axis_label(axis, label))
    }

    /// Label the x, y and z axes in order, from one to three labels
    ///
    /// Stops at the first failure; labels already sent stay applied.
    pub fn set_labels<L: AsRef<str>>(&mut self, labels: &[L]) -> Result<()> {
        Dims::from_count(labels.len())?;
        for (axis, label) in Axis::ORDER.iter().zip(labels) {
            self.set_axis_label(*axis, label.as_ref())?;
        }
        Ok(())
    }

    /// Remove every staged file and start counting plots from zero
    ///
    /// Verb and style are kept. All files are attempted even when some
    /// cannot be removed.
    pub fn reset(&mut self) -> Result<()> {
        debug!(
            "[{}] reset: {} plot(s), {} staged file(s)",
            self.id,
            self.nplots,
            self.staging.len()
        );
        self.nplots = 0;
        self.staging.cleanup()
    }

    /// Close gnuplot, wait for it to exit and remove all staged files
    ///
    /// Files are removed even when gnuplot exited abnormally; that exit
    /// error is reported in preference to a cleanup error.
    pub fn close(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let close_result = self.sink.close();
        let reset_result = self.reset();
        debug!("[{}] session closed", self.id);
        close_result.and(reset_result)
    }

    /// Number of plots issued since the last reset
    pub fn plot_count(&self) -> usize {
        self.nplots
    }

    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn plot_verb(&self) -> PlotVerb {
        self.plot_cmd
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Unique identifier used in log lines
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Temp files currently backing plots, in no particular order
    pub fn staged_files(&self) -> Vec<PathBuf> {
        self.staging
            .staged_files()
            .into_iter()
            .map(Path::to_path_buf)
            .collect()
    }

    /// Directory staged files are created in
    pub fn temp_dir(&self) -> &Path {
        self.staging.dir()
    }

    /// The underlying command sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: CommandSink> Drop for Plotter<S> {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("[{}] error while closing session: {}", self.id, e);
        }
    }
}
