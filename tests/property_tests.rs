//! Property-based tests for logpipe using proptest

use logpipe::{BlockingQueue, LogRecord};
use proptest::prelude::*;

// ============================================================================
// LogRecord Rendering Tests
// ============================================================================

proptest! {
    /// Single-line messages survive rendering byte-for-byte after the prefix
    #[test]
    fn test_single_line_message_round_trips(message in "[^\r\n]*") {
        let record = LogRecord::new("src/somewhere.rs", 7, message.clone());
        let rendered = record.render();

        // Prefix is "[timestamp] [file:line] "; the message is the remainder.
        let mut parts = rendered.splitn(3, "] ");
        parts.next().expect("timestamp field");
        parts.next().expect("location field");
        let tail = parts.next().expect("message field");

        prop_assert_eq!(tail, message.as_str());
    }

    /// Rendered lines never contain raw newlines or carriage returns
    #[test]
    fn test_rendered_line_is_single_line(message in ".*") {
        let record = LogRecord::new("a.rs", 1, message);
        let rendered = record.render();

        prop_assert!(!rendered.contains('\n'),
            "rendered line contains unsanitized newline: {:?}", rendered);
        prop_assert!(!rendered.contains('\r'),
            "rendered line contains unsanitized carriage return: {:?}", rendered);
    }

    /// Newlines in the input show up escaped, not dropped
    #[test]
    fn test_newlines_are_escaped_not_dropped(message in ".*") {
        let record = LogRecord::new("a.rs", 1, message.clone());

        if message.contains('\n') {
            prop_assert!(record.message().contains("\\n"),
                "newlines not escaped: {:?}", record.message());
        }
        if message.contains('\r') {
            prop_assert!(record.message().contains("\\r"),
                "carriage returns not escaped: {:?}", record.message());
        }
    }

    /// The rendered prefix is deterministic for a pinned timestamp
    #[test]
    fn test_render_prefix_with_pinned_timestamp(line in 0u32..100_000) {
        use chrono::TimeZone;

        let timestamp = chrono::Utc.with_ymd_and_hms(2024, 10, 17, 12, 34, 56).unwrap();
        let record = LogRecord::new("src/lib.rs", line, "msg").with_timestamp(timestamp);

        let expected = format!("[2024-10-17 12:34:56] [src/lib.rs:{}] msg", line);
        prop_assert_eq!(record.render(), expected);
    }

    /// Display and render agree for any message
    #[test]
    fn test_display_matches_render(message in ".*") {
        let record = LogRecord::new("a.rs", 9, message);
        prop_assert_eq!(format!("{}", record), record.render());
    }
}

// ============================================================================
// Queue Model Tests
// ============================================================================

/// One queue operation in the generated program
#[derive(Debug, Clone)]
enum QueueOp {
    Push(u32),
    TryPop,
}

fn queue_op_strategy() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        any::<u32>().prop_map(QueueOp::Push),
        Just(QueueOp::TryPop),
    ]
}

proptest! {
    /// The queue behaves exactly like a VecDeque for any op sequence
    #[test]
    fn test_queue_matches_vecdeque_model(ops in prop::collection::vec(queue_op_strategy(), 0..200)) {
        let queue = BlockingQueue::new();
        let mut model = std::collections::VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Push(value) => {
                    queue.push(value);
                    model.push_back(value);
                }
                QueueOp::TryPop => {
                    prop_assert_eq!(queue.try_pop(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
        }

        // Drain both and compare the leftovers.
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(queue.try_pop(), Some(expected));
        }
        prop_assert_eq!(queue.try_pop(), None);
    }
}
