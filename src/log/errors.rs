//! Logging-related error types

use std::{error::Error, fmt, io};

/// Errors that can occur while writing the log file
#[derive(Debug)]
pub enum LogError {
    /// I/O error when opening or writing the log file
    IoError(io::Error),
    /// The log directory could not be determined or created
    DirectoryCreationError(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::IoError(err) => write!(f, "I/O error: {}", err),
            LogError::DirectoryCreationError(msg) => {
                write!(f, "Failed to create directory: {}", msg)
            }
        }
    }
}

impl Error for LogError {}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::IoError(err)
    }
}
