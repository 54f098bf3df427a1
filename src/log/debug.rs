//! Log file writer
//!
//! Entries are buffered and flushed when the buffer grows past a threshold, when
//! enough time has passed, on every error entry, and on explicit flush.

use super::{LogError, LogLevel, formatter::LogFormatter};
use crate::config;
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
    sync::Mutex,
    time::{Duration, Instant},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

const LOG_FLUSH_BYTES: usize = 8 * 1024;
const LOG_FLUSH_INTERVAL: Duration = Duration::from_millis(250);
#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

struct LogSink {
    writer: BufWriter<File>,
    pending_bytes: usize,
    last_flush: Instant,
}

pub(super) struct DebugLogger {
    formatter: LogFormatter,
    sink: Mutex<Option<LogSink>>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::default(),
            sink: Mutex::new(None),
        }
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let line = self.formatter.format(level, message);

        let mut guard = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if guard.is_none() {
            *guard = Some(LogSink {
                writer: BufWriter::new(create_log_file()?),
                pending_bytes: 0,
                last_flush: Instant::now(),
            });
        }

        let Some(sink) = guard.as_mut() else {
            return Ok(());
        };

        sink.writer.write_all(line.as_bytes())?;
        sink.writer.write_all(b"\n")?;
        sink.pending_bytes = sink.pending_bytes.saturating_add(line.len() + 1);

        if level == LogLevel::Error || should_flush(sink.pending_bytes, sink.last_flush.elapsed()) {
            flush_sink(sink)?;
        }
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let mut guard = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match guard.as_mut() {
            Some(sink) => flush_sink(sink),
            None => Ok(()),
        }
    }
}

fn flush_sink(sink: &mut LogSink) -> Result<(), LogError> {
    sink.writer.flush()?;
    sink.pending_bytes = 0;
    sink.last_flush = Instant::now();
    Ok(())
}

fn create_log_file() -> Result<File, LogError> {
    let log_path = config::log_file_path().ok_or_else(|| LogError::DirectoryCreationError("configuration directory not resolved".to_string()))?;
    let log_dir = log_path
        .parent()
        .ok_or_else(|| LogError::DirectoryCreationError(format!("{} has no parent directory", log_path.display())))?;

    create_private_directory(log_dir)?;
    open_private_append_file(&log_path)
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path)?;
    set_private_directory_permissions(path)
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    set_private_file_permissions(path)?;
    Ok(file)
}

#[cfg(unix)]
fn set_private_directory_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_directory_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(unix)]
fn set_private_file_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_file_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

fn should_flush(pending_bytes: usize, elapsed_since_flush: Duration) -> bool {
    pending_bytes >= LOG_FLUSH_BYTES || elapsed_since_flush >= LOG_FLUSH_INTERVAL
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
