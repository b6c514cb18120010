//! # logpipe
//!
//! A minimal asynchronous file logger: producer threads enqueue formatted
//! lines, a single dedicated writer thread persists them to an append-only
//! file, and shutdown drains the queue so no enqueued record is lost.
//!
//! ## Features
//!
//! - **Non-blocking producers**: `log!` returns as soon as the line is on the
//!   queue; disk I/O happens on the writer thread
//! - **Lossless shutdown**: dropping the logger drains every queued record
//!   before the sink is closed
//! - **Compile-time format checking**: bad format templates fail the build,
//!   not the process
//! - **Thread safe**: share one `Arc<Logger>` across any number of threads

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{BlockingQueue, LogRecord, Logger, LoggerError, LoggerStats, Message, Result};
}

pub use crate::core::{BlockingQueue, LogRecord, Logger, LoggerError, LoggerStats, Message, Result};
