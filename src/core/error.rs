//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Construction-time failures of the logger service.
///
/// Only `Logger::create` can fail: once the sink is open and the writer
/// thread is running, sink write errors are recovered inside the writer and
/// reported through [`LoggerStats`](super::stats::LoggerStats) and stderr
/// rather than surfaced to producers, and format errors are caught at compile
/// time by the [`log!`](crate::log) macro.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink file could not be opened in append mode
    #[error("failed to open log sink '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The writer thread could not be spawned
    #[error("failed to spawn writer thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}

impl LoggerError {
    /// Create a sink open error with the offending path
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }
}
