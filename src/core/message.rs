//! Queue payload and log record types

use chrono::{DateTime, Utc};
use std::fmt;

/// Payload carried by the logger's queue.
///
/// The shutdown signal is a distinct variant rather than a reserved string
/// value, so an empty user message can never be mistaken for the stop signal
/// and silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A fully rendered log line, ready for the sink.
    Record(String),
    /// Wakes the writer thread and tells it to drain and exit. Never written
    /// to the sink.
    Shutdown,
}

/// An immutable log record built at the call site.
///
/// Captures the wall-clock time and call-site location at construction; the
/// message is sanitized once and never mutated afterwards. Rendering produces
/// the single sink line `[YYYY-MM-DD HH:MM:SS] [<file>:<line>] <message>`.
///
/// # Example
///
/// ```
/// use logpipe::LogRecord;
///
/// let record = LogRecord::new("src/server.rs", 42, "listener bound");
/// let line = record.render();
/// assert!(line.ends_with("[src/server.rs:42] listener bound"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: DateTime<Utc>,
    file: &'static str,
    line: u32,
    message: String,
}

impl LogRecord {
    /// Sanitize the user message so one record is always exactly one sink
    /// line.
    ///
    /// Newlines and carriage returns are escaped to prevent a message from
    /// injecting fake log entries. Tabs and all other bytes pass through
    /// untouched, so any single-line message round-trips byte for byte.
    fn sanitize_message(message: &str) -> String {
        message.replace('\n', "\\n").replace('\r', "\\r")
    }

    pub fn new(file: &'static str, line: u32, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            file,
            line,
            message: Self::sanitize_message(&message.into()),
        }
    }

    /// Pin the timestamp, replacing the one captured at construction.
    ///
    /// Used by tests that need deterministic rendering.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// The sanitized user message, without the timestamp/location prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Produce the sink line for this record.
    pub fn render(&self) -> String {
        format!(
            "[{}] [{}:{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.file,
            self.line,
            self.message
        )
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}:{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.file,
            self.line,
            self.message
        )
    }
}
