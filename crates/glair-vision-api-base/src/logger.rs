//! Leveled logging capability used by API clients.

use std::fmt;

/// Severity of a log message. Ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Nothing is logged.
    #[default]
    None,
    /// Failures only.
    Error,
    /// Failures and suspicious conditions.
    Warn,
    /// General progress information.
    Info,
    /// Request level detail.
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        write!(f, "{}", s)
    }
}

/// Sink for the diagnostic messages emitted by API clients.
///
/// Implement this to route SDK logs into an application specific logger. The default
/// [`LeveledLogger`] forwards to `tracing`.
pub trait Logger: Send + Sync {
    /// Emit a single message at the given level.
    fn log(&self, level: LogLevel, message: &str);

    /// Log at [`LogLevel::Error`].
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Log at [`LogLevel::Warn`].
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at [`LogLevel::Info`].
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log at [`LogLevel::Debug`].
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
}

/// Logger that drops every message more verbose than `level` and emits the rest as `tracing`
/// events under the `glair_vision` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeveledLogger {
    /// Most verbose level that is still emitted.
    pub level: LogLevel,
}

impl LeveledLogger {
    /// Create a logger emitting messages up to and including `level`.
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Whether a message at `level` passes this logger's filter.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self.level
    }
}

impl Logger for LeveledLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        match level {
            LogLevel::Error => tracing::error!(target: "glair_vision", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "glair_vision", "{message}"),
            LogLevel::Info => tracing::info!(target: "glair_vision", "{message}"),
            LogLevel::Debug => tracing::debug!(target: "glair_vision", "{message}"),
            LogLevel::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logger_is_silent() {
        let logger = LeveledLogger::default();

        assert_eq!(logger.level, LogLevel::None);
        assert!(!logger.enabled(LogLevel::Error));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_level_filtering() {
        let logger = LeveledLogger::new(LogLevel::Warn);

        assert!(logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::None));
    }

    #[test]
    fn test_log_does_not_panic_without_subscriber() {
        let logger = LeveledLogger::new(LogLevel::Debug);

        logger.error("error");
        logger.warn("warn");
        logger.info("info");
        logger.debug("debug");
        logger.log(LogLevel::None, "never");
    }

    #[test]
    fn test_log_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            LeveledLogger::new(LogLevel::Info).info("request sent");
        });
    }
}
