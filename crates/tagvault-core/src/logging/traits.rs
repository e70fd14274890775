//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction for store diagnostics
///
/// Implementations:
/// - `NoOpLogger`: Silent logger, the default for a `SecretStore`
/// - `ConsoleLogger`: Logs to stdout/stderr
///
/// Secret values never reach a logger; only tags, lengths and outcomes do.
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recording {
        lines: Mutex<Vec<String>>,
    }

    impl Logger for Recording {
        fn debug(&self, message: &str) {
            self.lines.lock().push(format!("debug: {}", message));
        }
        fn info(&self, message: &str) {
            self.lines.lock().push(format!("info: {}", message));
        }
        fn warn(&self, message: &str) {
            self.lines.lock().push(format!("warn: {}", message));
        }
        fn error(&self, message: &str) {
            self.lines.lock().push(format!("error: {}", message));
        }
    }

    #[test]
    fn test_log_macros_format() {
        let logger = Recording::default();
        crate::log_debug!(logger, "stored {} bytes", 4);
        crate::log_warn!(logger, "tag '{}' rejected", "app.key");

        let lines = logger.lines.lock();
        assert_eq!(lines[0], "debug: stored 4 bytes");
        assert_eq!(lines[1], "warn: tag 'app.key' rejected");
    }
}
