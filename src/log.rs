//! File logging for the settings editor.
//!
//! Logging is off unless `--debug` is passed. When enabled, every level goes to
//! `<config_dir>/logs/vpnset.log`.

mod debug;
mod errors;
mod formatter;
mod macros;

pub use errors::LogError;

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide logger used by the `log_*!` macros.
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

pub struct Logger {
    enabled: AtomicBool,
    debug_logger: debug::DebugLogger,
}

impl Logger {
    fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            debug_logger: debug::DebugLogger::new(),
        }
    }

    pub fn enable_debug(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    pub fn disable_debug(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn log_debug(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Debug, message)
    }

    pub fn log_info(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, message)
    }

    pub fn log_warn(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warning, message)
    }

    pub fn log_error(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, message)
    }

    /// Flush buffered lines to disk. Called once on shutdown.
    pub fn flush(&self) -> Result<(), LogError> {
        self.debug_logger.flush()
    }

    fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        if !self.is_debug_enabled() {
            return Ok(());
        }
        self.debug_logger.log(level, message)
    }
}
