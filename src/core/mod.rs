//! Core logger types

pub mod error;
pub mod logger;
pub mod message;
pub mod queue;
pub mod stats;

pub use error::{LoggerError, Result};
pub use logger::Logger;
pub use message::{LogRecord, Message};
pub use queue::BlockingQueue;
pub use stats::LoggerStats;
