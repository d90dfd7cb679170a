//! gnuplot Process Model
//!
//! Lifecycle record of the subprocess behind a session: what was
//! launched, when, and how it ended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the state of the gnuplot process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProcessState {
    /// Process has been described but not started
    #[default]
    Created,
    /// Process is running and accepting commands
    Running,
    /// Process has been waited on
    Terminated,
}

/// Lifecycle information of a spawned process
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    /// OS process identifier
    pub pid: Option<u32>,

    /// Current state of the process
    pub state: ProcessState,

    /// When the process was started
    pub start_time: Option<DateTime<Utc>>,

    /// When the process was reaped
    pub end_time: Option<DateTime<Utc>>,

    /// Exit code, `None` if killed by a signal or still running
    pub exit_code: Option<i32>,

    /// Resolved executable path
    pub program: String,

    /// Arguments passed to the executable
    pub args: Vec<String>,
}

impl ProcessInfo {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self {
            pid: None,
            state: ProcessState::Created,
            start_time: None,
            end_time: None,
            exit_code: None,
            program,
            args,
        }
    }

    pub fn mark_started(&mut self, pid: u32) {
        self.pid = Some(pid);
        self.state = ProcessState::Running;
        self.start_time = Some(Utc::now());
    }

    pub fn mark_terminated(&mut self, exit_code: Option<i32>) {
        self.state = ProcessState::Terminated;
        self.end_time = Some(Utc::now());
        self.exit_code = exit_code;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running)
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated)
    }

    /// Wall-clock lifetime, once the process has been reaped
    pub fn execution_duration(&self) -> Option<std::time::Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                Some(end.signed_duration_since(start).to_std().unwrap_or_default())
            }
            _ => None,
        }
    }

    pub fn exited_successfully(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Program and arguments as a single shell-like line
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl std::fmt::Display for ProcessInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state_str = match self.state {
            ProcessState::Created => "Created",
            ProcessState::Running => "Running",
            ProcessState::Terminated => "Terminated",
        };
        let pid_str = self.pid.map_or("N/A".to_string(), |pid| pid.to_string());

        write!(f, "{} [{}] - {}", self.command_line(), pid_str, state_str)?;
        if let Some(code) = self.exit_code {
            write!(f, " (exit: {})", code)?;
        }
        Ok(())
    }
}
