use crate::log::LogLevel;
use chrono::Local;

#[derive(Clone)]
pub struct LogFormatter {
    include_timestamp: bool,
}

impl LogFormatter {
    pub fn new(include_timestamp: bool) -> Self {
        Self { include_timestamp }
    }

    pub fn format(&self, level: LogLevel, message: &str) -> String {
        let mut formatted = String::new();

        if self.include_timestamp {
            formatted.push_str(&Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string());
            formatted.push(' ');
        }

        formatted.push_str(&format!("[{}] ", level.as_str()));
        // One entry per line, whatever the message contains.
        formatted.push_str(&message.replace(['\n', '\r'], " "));

        formatted
    }
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
#[path = "../test/log/formatter.rs"]
mod tests;
