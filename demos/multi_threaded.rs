//! Multi-threaded logging example
//!
//! Ten threads each log one hundred uniquely numbered messages through a
//! shared logger handle; dropping the last handle drains the queue so every
//! message reaches the file.
//!
//! Run with: cargo run --example multi_threaded

use logpipe::{log, Logger, Result};
use std::sync::Arc;
use std::thread;

const NUM_THREADS: usize = 10;
const MESSAGES_PER_THREAD: usize = 100;

fn main() -> Result<()> {
    println!("Starting logger test with multiple threads...");

    let logger = Arc::new(Logger::create("multi_threaded.log")?);

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    log!(logger, "Thread {} logging message #{}", thread_id, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    // Last handle: the drop drains the queue and joins the writer.
    let enqueued = logger.stats().records_enqueued();
    drop(logger);

    println!(
        "Test finished: {} messages written to 'multi_threaded.log'",
        enqueued
    );

    Ok(())
}
