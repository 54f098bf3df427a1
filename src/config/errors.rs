use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    HomeDirectoryNotFound,
    ParseError { path: PathBuf, message: String },
    FormattingError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::HomeDirectoryNotFound => write!(f, "Failed to locate the home directory"),
            ConfigError::ParseError { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            ConfigError::FormattingError(msg) => write!(f, "Formatting error: {}", msg),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}
