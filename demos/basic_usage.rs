//! Basic logger usage example
//!
//! Demonstrates creating a logger, logging formatted messages, and shutting
//! down cleanly.
//!
//! Run with: cargo run --example basic_usage

use logpipe::{log, Logger, Result};

fn main() -> Result<()> {
    println!("=== logpipe - Basic Usage Example ===\n");

    // Open the sink and start the writer thread
    let mut logger = Logger::create("basic_usage.log")?;

    println!("1. Logging a few messages:");
    log!(logger, "Application started");

    let port = 8080;
    log!(logger, "Server listening on port {}", port);

    let user_id = 42;
    let action = "login";
    log!(logger, "User {} performed action: {}", user_id, action);

    println!("   Logged 3 messages (producers never touch the disk)");

    // Drain the queue and join the writer
    println!("\n2. Shutting down:");
    logger.shutdown();
    println!(
        "   {} enqueued, {} written, {} write errors",
        logger.stats().records_enqueued(),
        logger.stats().records_written(),
        logger.stats().write_errors()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'basic_usage.log' for the output");

    Ok(())
}
