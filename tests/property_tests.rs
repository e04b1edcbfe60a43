// Property-based tests using proptest
// Random operation sequences over HistoryLog, verifying the index invariants

use nav_history::{HistoryLog, Location, Position};
use proptest::prelude::*;

fn loc(line: usize) -> Location {
    Location::new("d1.rs", Position::new(line, 0))
}

/// Random history operations
#[derive(Debug, Clone)]
enum HistoryOp {
    Record { line: usize },
    Previous,
    Next,
}

fn history_op_strategy() -> impl Strategy<Value = HistoryOp> {
    prop_oneof![
        3 => (0usize..50).prop_map(|line| HistoryOp::Record { line }),
        2 => Just(HistoryOp::Previous),
        2 => Just(HistoryOp::Next),
    ]
}

proptest! {
    /// The cursor index stays in [0, len-1] whenever the log is non-empty
    #[test]
    fn index_stays_in_bounds(ops in prop::collection::vec(history_op_strategy(), 0..200)) {
        let mut log = HistoryLog::new();
        for op in &ops {
            match op {
                HistoryOp::Record { line } => log.record(loc(*line)),
                HistoryOp::Previous => {
                    log.previous();
                }
                HistoryOp::Next => {
                    log.next();
                }
            }
            match log.index() {
                Some(index) => prop_assert!(index < log.len()),
                None => prop_assert!(log.is_empty()),
            }
        }
    }

    /// After any sequence of records, previous() replays the entries in
    /// reverse insertion order and then becomes a no-op
    #[test]
    fn previous_walks_reverse_insertion_order(
        lines in prop::collection::vec(0usize..1000, 1..50)
    ) {
        let mut log = HistoryLog::new();
        for &line in &lines {
            log.record(loc(line));
        }
        // The cursor starts on the last entry, so the walk begins one back
        for &expected in lines.iter().rev().skip(1) {
            prop_assert_eq!(log.previous().cloned(), Some(loc(expected)));
        }
        prop_assert!(log.previous().is_none());
        prop_assert_eq!(log.index(), Some(0));
    }

    /// next() immediately after recording is always a no-op
    #[test]
    fn next_at_end_is_noop(lines in prop::collection::vec(0usize..1000, 1..50)) {
        let mut log = HistoryLog::new();
        for &line in &lines {
            log.record(loc(line));
        }
        prop_assert!(log.next().is_none());
        prop_assert_eq!(log.index(), Some(lines.len() - 1));
    }

    /// With an unbounded scan, record_unique keeps the log duplicate-free
    #[test]
    fn unbounded_dedup_keeps_entries_distinct(
        lines in prop::collection::vec(0usize..10, 0..100)
    ) {
        let mut log = HistoryLog::new();
        for &line in &lines {
            log.record_unique(loc(line), None);
        }
        let entries = log.entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }
}
