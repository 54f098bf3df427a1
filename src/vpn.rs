//! Termination of a running tunnel process.
//!
//! Tunnel lifecycle is owned elsewhere; the settings editor only needs to stop an
//! active tunnel before the configuration is purged. A running tunnel is
//! discovered through the pid file it leaves in the configuration directory.

use crate::{log_debug, log_info, log_warn};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum VpnError {
    IoError(io::Error),
    InvalidPidFile(String),
    SignalFailed(String),
}

impl fmt::Display for VpnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VpnError::IoError(err) => write!(f, "I/O error: {}", err),
            VpnError::InvalidPidFile(msg) => write!(f, "Invalid pid file: {}", msg),
            VpnError::SignalFailed(msg) => write!(f, "Failed to stop tunnel process: {}", msg),
        }
    }
}

impl std::error::Error for VpnError {}

impl From<io::Error> for VpnError {
    fn from(err: io::Error) -> Self {
        VpnError::IoError(err)
    }
}

/// What happened when termination was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    NoActiveSession,
    Terminated(i32),
}

pub trait SessionControl {
    /// Terminate the active tunnel session if there is one.
    fn terminate_active_session(&mut self) -> Result<Termination, VpnError>;
}

#[derive(Debug, Clone)]
pub struct PidFileSession {
    pid_file: PathBuf,
}

impl PidFileSession {
    pub fn new(pid_file: impl Into<PathBuf>) -> Self {
        Self { pid_file: pid_file.into() }
    }

    pub fn pid_file(&self) -> &Path {
        &self.pid_file
    }

    fn read_pid(&self) -> Result<Option<i32>, VpnError> {
        let content = match fs::read_to_string(&self.pid_file) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        match trimmed.parse::<i32>() {
            Ok(pid) if pid > 0 => Ok(Some(pid)),
            _ => Err(VpnError::InvalidPidFile(format!("{:?} in {}", trimmed, self.pid_file.display()))),
        }
    }
}

impl SessionControl for PidFileSession {
    fn terminate_active_session(&mut self) -> Result<Termination, VpnError> {
        let Some(pid) = self.read_pid()? else {
            log_debug!("No pid file at {}, no active session", self.pid_file.display());
            return Ok(Termination::NoActiveSession);
        };

        match send_terminate(pid)? {
            true => {
                log_info!("Sent SIGTERM to tunnel process {}", pid);
                Ok(Termination::Terminated(pid))
            }
            false => {
                log_warn!("Tunnel process {} from pid file is not running", pid);
                Ok(Termination::NoActiveSession)
            }
        }
    }
}

/// Returns `false` when the process no longer exists.
#[cfg(unix)]
fn send_terminate(pid: i32) -> Result<bool, VpnError> {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    match kill(Pid::from_raw(pid), Signal::SIGTERM) {
        Ok(()) => Ok(true),
        Err(Errno::ESRCH) => Ok(false),
        Err(err) => Err(VpnError::SignalFailed(err.to_string())),
    }
}

#[cfg(not(unix))]
fn send_terminate(pid: i32) -> Result<bool, VpnError> {
    Err(VpnError::SignalFailed(format!("cannot signal process {} on this platform", pid)))
}

#[cfg(test)]
#[path = "test/vpn.rs"]
mod tests;
