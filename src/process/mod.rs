//! gnuplot Process Management
//!
//! Owns one gnuplot subprocess and the write end of its stdin. Commands
//! are written as newline-terminated lines; nothing is read back, and
//! gnuplot's own stdout/stderr are inherited from the parent.
//!
//! Every call blocks until the OS has accepted the write or the child has
//! exited. There is no timeout: a hung gnuplot blocks the caller.

pub mod locate;

use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

use crate::error::{Error, Result};
use crate::models::ProcessInfo;

pub use locate::{find_program, gnuplot_path, resolve_executable};

/// Argument asking gnuplot to keep plot windows open after it exits
pub const PERSIST_ARG: &str = "-persist";

/// Destination for command lines
///
/// [`ProcessHandle`] is the production implementation. The session only
/// talks to this trait, which lets tests observe the exact command stream.
pub trait CommandSink {
    /// Write `line` followed by a newline, returning the bytes written
    fn send_line(&mut self, line: &str) -> Result<usize>;

    /// Close the channel and release whatever is behind it
    fn close(&mut self) -> Result<()>;
}

/// Handle to a running gnuplot process
#[derive(Debug)]
pub struct ProcessHandle {
    child: Child,
    stdin: Option<ChildStdin>,
    info: ProcessInfo,
    debug: bool,
}

impl ProcessHandle {
    /// Start `gnuplot` from PATH, optionally with `-persist`
    pub fn start(persist: bool, debug: bool) -> Result<Self> {
        let program = gnuplot_path()?;
        Self::spawn_program(program, &start_args(persist), debug)
    }

    /// Start an explicit executable with the given arguments
    pub fn spawn_program(program: &Path, args: &[String], debug: bool) -> Result<Self> {
        let mut info = ProcessInfo::new(program.display().to_string(), args.to_vec());
        debug!("--> [{}] {:?}", info.program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| Error::SpawnFailed {
                command: info.command_line(),
                reason: e.to_string(),
            })?;

        let stdin = match child.stdin.take() {
            Some(stdin) => stdin,
            None => {
                // Never leave a started child behind
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::StdinUnavailable {
                    command: info.command_line(),
                });
            }
        };

        info.mark_started(child.id());
        Ok(Self {
            child,
            stdin: Some(stdin),
            info,
            debug,
        })
    }

    /// Write one command line to gnuplot's stdin
    pub fn send(&mut self, line: &str) -> Result<usize> {
        let stdin = self.stdin.as_mut().ok_or(Error::SessionClosed)?;

        let mut payload = String::with_capacity(line.len() + 1);
        payload.push_str(line);
        payload.push('\n');

        let result = stdin.write_all(payload.as_bytes());
        let written = if result.is_ok() { payload.len() } else { 0 };

        if self.debug {
            info!("cmd> {}", line);
            info!("res> {}", written);
        } else {
            trace!("cmd> {}", line);
        }

        result.map_err(|e| Error::CommandWriteFailed {
            command: line.to_string(),
            reason: e.to_string(),
        })?;
        Ok(written)
    }

    /// Close stdin and wait for gnuplot to exit
    ///
    /// Calling this again after the process was reaped is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.info.is_terminated() {
            return Ok(());
        }

        // Dropping the pipe sends EOF, which makes gnuplot exit
        drop(self.stdin.take());

        let status = self.child.wait()?;
        self.info.mark_terminated(status.code());
        debug!("gnuplot [{}] exited: {}", self.child.id(), status);

        check_exit_status(&self.info, status)
    }

    /// Lifecycle information of the child
    pub fn info(&self) -> &ProcessInfo {
        &self.info
    }

    /// OS process id
    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Whether the command channel is still open
    pub fn is_open(&self) -> bool {
        self.stdin.is_some()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

impl CommandSink for ProcessHandle {
    fn send_line(&mut self, line: &str) -> Result<usize> {
        self.send(line)
    }

    fn close(&mut self) -> Result<()> {
        ProcessHandle::close(self)
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        if !self.info.is_terminated() {
            // Reap the child so it does not linger as a zombie
            drop(self.stdin.take());
            match self.child.wait() {
                Ok(status) => self.info.mark_terminated(status.code()),
                Err(e) => warn!("Failed to reap gnuplot [{}]: {}", self.child.id(), e),
            }
        }
    }
}

/// Arguments gnuplot is started with
pub fn start_args(persist: bool) -> Vec<String> {
    if persist {
        vec![PERSIST_ARG.to_string()]
    } else {
        Vec::new()
    }
}

fn check_exit_status(info: &ProcessInfo, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(Error::ProcessExitFailed {
            command: info.command_line(),
            status: status.to_string(),
        })
    }
}
