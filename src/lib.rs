// Imports vpnset specific modules
pub mod args;
pub mod config;
pub mod log;
pub mod tui;
pub mod validate;
pub mod vpn;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(config::ConfigError),
    Log(log::LogError),
    Render(tui::RenderError),
    Vpn(vpn::VpnError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
            Error::Render(err) => write!(f, "Render error: {}", err),
            Error::Vpn(err) => write!(f, "VPN error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

// Implement From for each error type
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}

impl From<tui::RenderError> for Error {
    fn from(err: tui::RenderError) -> Self {
        Error::Render(err)
    }
}

impl From<vpn::VpnError> for Error {
    fn from(err: vpn::VpnError) -> Self {
        Error::Vpn(err)
    }
}

#[cfg(test)]
#[path = "test/support.rs"]
pub(crate) mod test_support;
