//! File-based debug logger for troubleshooting
//!
//! Backends that sit below a `SecretStore` have no logger of their own, so
//! they report through this global file logger. Output is off unless
//! `TAGVAULT_DEBUG` is set to `1` or `true`; `TAGVAULT_LOG_LEVEL` picks the
//! minimum level (default `debug`).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::SystemTime;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Debug,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

struct FileLoggerState {
    file: Option<File>,
    min_level: LogLevel,
    enabled: bool,
}

impl FileLoggerState {
    fn new() -> Self {
        let enabled = std::env::var("TAGVAULT_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = std::env::var("TAGVAULT_LOG_LEVEL")
            .map(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);

        // Only touch the filesystem when logging is switched on
        let file = if enabled { Self::open() } else { None };

        Self { file, min_level, enabled }
    }

    fn open() -> Option<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(Self::default_log_path())
            .ok()
    }

    fn default_log_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push("tagvault-debug.log");
        path
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if !self.enabled || level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let timestamp = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| {
                    let secs = d.as_secs();
                    let millis = d.subsec_millis();
                    let hours = (secs % 86400) / 3600;
                    let mins = (secs % 3600) / 60;
                    let secs = secs % 60;
                    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
                })
                .unwrap_or_else(|_| "??:??:??.???".to_string());

            let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp, level, module, message);
            let _ = file.flush();
        }
    }
}

static LOGGER: Lazy<Mutex<FileLoggerState>> = Lazy::new(|| Mutex::new(FileLoggerState::new()));

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    LOGGER.lock().write(level, module, message);
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Get the path to the log file
pub fn log_file_path() -> PathBuf {
    FileLoggerState::default_log_path()
}

/// Truncate the log file and reopen it if logging is enabled
pub fn clear_log() {
    let mut logger = LOGGER.lock();
    if !logger.enabled {
        return;
    }
    if let Ok(file) = File::create(log_file_path()) {
        drop(file);
    }
    logger.file = FileLoggerState::open();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("error"), LogLevel::Error);
        assert_eq!(LogLevel::parse("verbose"), LogLevel::Debug);
    }

    #[test]
    fn test_disabled_state_drops_messages() {
        let mut state = FileLoggerState {
            file: None,
            min_level: LogLevel::Debug,
            enabled: false,
        };
        state.write(LogLevel::Error, "test", "dropped");
        assert!(state.file.is_none());
    }

    #[test]
    fn test_logging() {
        // Just make sure it doesn't panic
        debug("test", "test message");
        info("test", "test message");
        warn("test", "test message");
        error("test", "test message");
        assert!(log_file_path().ends_with("tagvault-debug.log"));
    }
}
