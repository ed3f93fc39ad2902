// SPDX-License-Identifier: MPL-2.0
//! Log records and intercepted events.

use chrono::{DateTime, Utc};
use std::fmt;

/// Severity channel of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Upper-case label used in formatted output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single diagnostic log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// Auxiliary values, already formatted. Never shown to the user.
    pub details: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Creates a record stamped with the current wall-clock time.
    pub fn new(level: Level, message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            level,
            message: message.into(),
            details,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.message
        )?;
        for detail in &self.details {
            write!(f, " {detail}")?;
        }
        Ok(())
    }
}

/// Where an intercepted event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptSource {
    /// A record written to the error channel of the intercepted sink.
    ErrorLog,
    /// A record written to the warning channel of the intercepted sink.
    WarningLog,
    /// A panic caught by the installed hook.
    Panic,
    /// A background task that failed without anyone handling the error.
    Rejection,
}

impl InterceptSource {
    /// Returns true for the process-wide failure signals.
    #[must_use]
    pub fn is_uncaught(self) -> bool {
        matches!(self, InterceptSource::Panic | InterceptSource::Rejection)
    }
}

/// An event routed from the diagnostics layer into the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Intercepted {
    pub source: InterceptSource,
    pub message: String,
    pub details: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Error > Level::Warn);
        assert!(Level::Warn > Level::Info);
        assert!(Level::Info > Level::Debug);
    }

    #[test]
    fn record_display_includes_level_message_and_details() {
        let record = LogRecord::new(
            Level::Warn,
            "disk nearly full",
            vec!["92%".to_string(), "/var".to_string()],
        );
        let line = record.to_string();
        assert!(line.contains("[WARN] disk nearly full 92% /var"));
    }

    #[test]
    fn only_panics_and_rejections_are_uncaught() {
        assert!(InterceptSource::Panic.is_uncaught());
        assert!(InterceptSource::Rejection.is_uncaught());
        assert!(!InterceptSource::ErrorLog.is_uncaught());
        assert!(!InterceptSource::WarningLog.is_uncaught());
    }
}
