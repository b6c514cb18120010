//! Thread-safe FIFO handoff between producer threads and the writer.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// An unbounded multi-producer FIFO with blocking and non-blocking removal.
///
/// `push` never blocks beyond brief lock contention and wakes at most one
/// parked consumer; `wait_and_pop` parks the calling thread until a value is
/// available. The queue is safe for any number of concurrent producers and
/// consumers, although the logger drives it with exactly one consumer.
///
/// # Example
///
/// ```
/// use logpipe::BlockingQueue;
///
/// let queue = BlockingQueue::new();
/// queue.push("first");
/// queue.push("second");
///
/// assert_eq!(queue.try_pop(), Some("first"));
/// assert_eq!(queue.wait_and_pop(), "second");
/// assert_eq!(queue.try_pop(), None);
/// ```
pub struct BlockingQueue<T> {
    items: Mutex<VecDeque<T>>,
    not_empty: Condvar,
}

impl<T> BlockingQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    /// Append `value` at the tail and wake one parked consumer, if any.
    pub fn push(&self, value: T) {
        let mut items = self.items.lock();
        items.push_back(value);
        self.not_empty.notify_one();
    }

    /// Remove and return the head element, parking until one is available.
    ///
    /// The non-empty predicate is re-checked after every wakeup, so a thread
    /// that lost the race against another consumer goes back to waiting
    /// instead of popping from an empty queue. Blocks indefinitely if nothing
    /// is ever pushed; the logger's shutdown message guarantees its writer an
    /// eventual wakeup.
    pub fn wait_and_pop(&self) -> T {
        let mut items = self.items.lock();
        loop {
            if let Some(value) = items.pop_front() {
                return value;
            }
            self.not_empty.wait(&mut items);
        }
    }

    /// Remove and return the head element if one is present, without blocking.
    pub fn try_pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    /// Number of queued elements at the moment of the call.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
