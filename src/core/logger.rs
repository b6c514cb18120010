//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    message::{LogRecord, Message},
    queue::BlockingQueue,
    stats::LoggerStats,
};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Asynchronous file logger.
///
/// Producers hand rendered lines to an unbounded queue and return without
/// touching the disk; a single background writer thread pops lines and
/// persists them to an append-only file. Shutdown drains the queue to
/// completion before the sink is closed, so every record enqueued before the
/// shutdown signal reaches the file.
///
/// The service is explicitly constructed and shared: callers that want one
/// logger per process wrap it in an `Arc` and clone the handle into each
/// thread. The sink itself is owned by the writer thread, so it can only be
/// closed after the writer has finished draining.
///
/// # Example
///
/// ```no_run
/// use logpipe::{log, Logger, Result};
/// use std::sync::Arc;
///
/// fn main() -> Result<()> {
///     let logger = Arc::new(Logger::create("app.log")?);
///
///     let worker = {
///         let logger = Arc::clone(&logger);
///         std::thread::spawn(move || log!(logger, "hello from a worker"))
///     };
///     log!(logger, "hello from main");
///
///     worker.join().unwrap();
///     // Dropping the last handle drains the queue and joins the writer.
///     drop(logger);
///     Ok(())
/// }
/// ```
pub struct Logger {
    queue: Arc<BlockingQueue<Message>>,
    active: Arc<AtomicBool>,
    stats: Arc<LoggerStats>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Logger {
    /// Open the sink at `path` in append mode and start the writer thread.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpen`] if the file cannot be opened and
    /// [`LoggerError::WorkerSpawn`] if the writer thread cannot be started.
    /// A logger is never handed out with an invalid sink.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::sink_open(path.display().to_string(), source))?;

        let queue = Arc::new(BlockingQueue::new());
        let active = Arc::new(AtomicBool::new(true));
        let stats = Arc::new(LoggerStats::new());

        let worker = {
            let queue = Arc::clone(&queue);
            let active = Arc::clone(&active);
            let stats = Arc::clone(&stats);
            // The writer takes exclusive ownership of the sink; the file is
            // closed when the writer returns, which is after the drain.
            let sink = BufWriter::new(file);

            thread::Builder::new()
                .name("logpipe-writer".to_string())
                .spawn(move || Self::writer_loop(sink, &queue, &active, &stats))
                .map_err(LoggerError::WorkerSpawn)?
        };

        Ok(Self {
            queue,
            active,
            stats,
            worker: Some(worker),
        })
    }

    /// Render a record for the given call site and enqueue it.
    ///
    /// Returns as soon as the line is on the queue; the disk write happens
    /// later on the writer thread. Safe to call concurrently from any number
    /// of threads. Most callers go through the [`log!`](crate::log) macro,
    /// which captures `file!()`/`line!()` and checks the format string at
    /// compile time.
    pub fn log_at(&self, file: &'static str, line: u32, message: impl Into<String>) {
        let record = LogRecord::new(file, line, message);
        self.stats.record_enqueued();
        self.queue.push(Message::Record(record.render()));
    }

    /// Get the logger counters for observability
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logpipe::Logger;
    ///
    /// let mut logger = Logger::create("app.log").unwrap();
    /// // After logging operations...
    /// logger.shutdown();
    /// let stats = logger.stats();
    /// assert_eq!(stats.records_written(), stats.records_enqueued());
    /// ```
    pub fn stats(&self) -> &LoggerStats {
        &self.stats
    }

    /// Signal the writer to stop, then block until it has drained the queue.
    ///
    /// The active flag is cleared before the shutdown message is pushed, so
    /// the writer observes the stop request even if it is parked on an empty
    /// queue. Idempotent: a second call (or the implicit one in `Drop`) finds
    /// no worker handle and returns immediately.
    ///
    /// This wait has no timeout; if the sink is wedged mid-write the call
    /// stalls with it. Use [`shutdown_timeout`](Self::shutdown_timeout) when
    /// that is unacceptable.
    pub fn shutdown(&mut self) {
        if let Some(worker) = self.worker.take() {
            self.active.store(false, Ordering::Release);
            self.queue.push(Message::Shutdown);

            if let Err(e) = worker.join() {
                eprintln!("[logpipe] writer thread panicked during shutdown: {:?}", e);
            }
        }
    }

    /// Shutdown, but give up waiting for the writer after `timeout`.
    ///
    /// Returns `true` if the writer finished draining within the timeout.
    /// On timeout the writer is left detached, still draining; records it has
    /// not yet written may be lost if the process exits.
    pub fn shutdown_timeout(&mut self, timeout: Duration) -> bool {
        let Some(worker) = self.worker.take() else {
            return true;
        };

        self.active.store(false, Ordering::Release);
        self.queue.push(Message::Shutdown);

        let start = Instant::now();
        loop {
            if worker.is_finished() {
                // Thread finished, join it to check for panics
                if let Err(e) = worker.join() {
                    eprintln!("[logpipe] writer thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[logpipe] writer thread did not finish within {:?}; \
                     queued records may be lost",
                    timeout
                );
                return false;
            }

            // Small sleep to avoid busy-waiting
            thread::sleep(Duration::from_millis(10));
        }
    }

    /// The writer thread body: a blocking phase followed by a drain.
    ///
    /// While active, park on the queue and persist each record; the shutdown
    /// message breaks the blocking phase without being written. Afterwards,
    /// sweep the queue with non-blocking pops until it is empty. The active
    /// flag is re-checked before every blocking wait, never only after, so a
    /// stop requested while the queue is empty is observed as soon as the
    /// shutdown message lands.
    fn writer_loop(
        mut sink: BufWriter<File>,
        queue: &BlockingQueue<Message>,
        active: &AtomicBool,
        stats: &LoggerStats,
    ) {
        while active.load(Ordering::Acquire) {
            match queue.wait_and_pop() {
                Message::Record(line) => {
                    Self::write_line(&mut sink, &line, stats);
                    // Flush on idle: a burst is durable once the queue empties
                    // out, without paying a syscall per line.
                    if queue.is_empty() {
                        Self::flush_sink(&mut sink, stats);
                    }
                }
                Message::Shutdown => break,
            }
        }

        // Drain: everything enqueued before the shutdown signal is persisted.
        while let Some(message) = queue.try_pop() {
            if let Message::Record(line) = message {
                Self::write_line(&mut sink, &line, stats);
            }
        }
        Self::flush_sink(&mut sink, stats);
    }

    /// Write one line to the sink, recovering failures locally.
    ///
    /// The producer already returned from `log_at`, so there is nobody to
    /// propagate an error to; failed writes are counted and reported on
    /// stderr.
    fn write_line(sink: &mut BufWriter<File>, line: &str, stats: &LoggerStats) {
        match writeln!(sink, "{}", line) {
            Ok(()) => {
                stats.record_written();
            }
            Err(e) => {
                stats.record_write_error();
                eprintln!("[logpipe] sink write failed: {}", e);
            }
        }
    }

    fn flush_sink(sink: &mut BufWriter<File>, stats: &LoggerStats) {
        if let Err(e) = sink.flush() {
            stats.record_write_error();
            eprintln!("[logpipe] sink flush failed: {}", e);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("active", &self.active.load(Ordering::Relaxed))
            .field("pending", &self.queue.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Dropping the last handle runs the full untimed drain, so records
        // enqueued before the drop are on disk when it returns.
        self.shutdown();
    }
}
