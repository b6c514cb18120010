//! Logging macro for ergonomic formatted log calls.
//!
//! The macro captures the call site with `file!()`/`line!()` and formats the
//! message with `format!`, so a template that does not match its arguments is
//! a compile error rather than a runtime failure.
//!
//! # Examples
//!
//! ```no_run
//! use logpipe::{log, Logger};
//!
//! let logger = Logger::create("app.log").unwrap();
//!
//! // Basic logging
//! log!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! log!(logger, "Server listening on port {}", port);
//! ```

/// Log a formatted message with automatic call-site capture.
///
/// Works through any expression that dereferences to a
/// [`Logger`](crate::Logger), including `Arc<Logger>` handles shared across
/// threads.
///
/// # Examples
///
/// ```no_run
/// # let logger = logpipe::Logger::create("app.log").unwrap();
/// use logpipe::log;
/// log!(logger, "Simple message");
/// log!(logger, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at(file!(), line!(), format!($($arg)+))
    };
}
