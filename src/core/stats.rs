//! Logger statistics for observability
//!
//! Counters for monitoring logger health: how many records producers have
//! enqueued, how many the writer has persisted, and how many sink writes
//! failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared between producers and the writer thread.
///
/// After a clean shutdown with a healthy sink, `records_written` equals
/// `records_enqueued`; a growing `write_errors` count is the only producer-
/// visible trace of a failing sink.
///
/// # Example
///
/// ```
/// use logpipe::LoggerStats;
///
/// let stats = LoggerStats::new();
/// stats.record_enqueued();
/// stats.record_written();
///
/// assert_eq!(stats.records_enqueued(), 1);
/// assert_eq!(stats.records_written(), 1);
/// assert_eq!(stats.write_errors(), 0);
/// ```
#[derive(Debug)]
pub struct LoggerStats {
    /// Records accepted from producers and pushed onto the queue
    records_enqueued: AtomicU64,

    /// Records successfully written to the sink
    records_written: AtomicU64,

    /// Sink write or flush failures
    write_errors: AtomicU64,
}

impl LoggerStats {
    /// Create a new stats instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_enqueued: AtomicU64::new(0),
            records_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    /// Get the number of records enqueued by producers
    #[inline]
    pub fn records_enqueued(&self) -> u64 {
        self.records_enqueued.load(Ordering::Relaxed)
    }

    /// Get the number of records persisted to the sink
    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    /// Get the number of failed sink writes or flushes
    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Record an enqueued log record
    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.records_enqueued.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a persisted log record
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed sink write or flush
    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerStats {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            records_enqueued: AtomicU64::new(self.records_enqueued()),
            records_written: AtomicU64::new(self.records_written()),
            write_errors: AtomicU64::new(self.write_errors()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = LoggerStats::new();
        assert_eq!(stats.records_enqueued(), 0);
        assert_eq!(stats.records_written(), 0);
        assert_eq!(stats.write_errors(), 0);
    }

    #[test]
    fn test_stats_record_enqueued() {
        let stats = LoggerStats::new();
        assert_eq!(stats.record_enqueued(), 0); // Returns previous value
        assert_eq!(stats.records_enqueued(), 1);
        stats.record_enqueued();
        assert_eq!(stats.records_enqueued(), 2);
    }

    #[test]
    fn test_stats_record_write_error() {
        let stats = LoggerStats::new();
        stats.record_write_error();
        stats.record_write_error();
        assert_eq!(stats.write_errors(), 2);
        assert_eq!(stats.records_written(), 0);
    }

    #[test]
    fn test_stats_clone_is_snapshot() {
        let stats = LoggerStats::new();
        stats.record_enqueued();
        stats.record_written();

        let snapshot = stats.clone();
        assert_eq!(snapshot.records_enqueued(), 1);
        assert_eq!(snapshot.records_written(), 1);

        // Original and clone are independent
        stats.record_enqueued();
        assert_eq!(stats.records_enqueued(), 2);
        assert_eq!(snapshot.records_enqueued(), 1);
    }
}
