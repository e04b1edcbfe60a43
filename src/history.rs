//! History log: an append-only sequence of locations with a traversal cursor.
//!
//! The cursor index always stays within `[0, len-1]` while the log is
//! non-empty; `previous`/`next` clamp at the ends rather than wrapping.
//! Entries are never evicted.

use crate::location::Location;

/// Ordered, append-only sequence of locations with a current read cursor
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<Location>,
    /// Index of the current entry; meaningless while `entries` is empty
    index: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location and move the cursor to it.
    ///
    /// Subsequent `previous`/`next` calls start from this entry.
    pub fn record(&mut self, location: Location) {
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    /// Append a location unless an equal one was recorded recently.
    ///
    /// Scans backward from the most recent entry, at most `window` entries
    /// (`None` scans the full log). Note this suppresses a location that
    /// matches any scanned entry, even one recorded long ago when the scan
    /// is unbounded. Returns whether the location was recorded.
    pub fn record_unique(&mut self, location: Location, window: Option<usize>) -> bool {
        let scanned = match window {
            Some(limit) => limit.min(self.entries.len()),
            None => self.entries.len(),
        };
        if self.entries.iter().rev().take(scanned).any(|e| *e == location) {
            return false;
        }
        self.record(location);
        true
    }

    /// Step back one entry, returning the newly-current location.
    ///
    /// A no-op at index 0 or on an empty log: the index is unchanged and
    /// `None` is returned.
    pub fn previous(&mut self) -> Option<&Location> {
        if self.entries.is_empty() || self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward one entry, returning the newly-current location.
    ///
    /// A no-op at the last entry or on an empty log.
    pub fn next(&mut self) -> Option<&Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// The entry the cursor currently points at
    pub fn current(&self) -> Option<&Location> {
        self.entries.get(self.index)
    }

    /// Current cursor index, or `None` while the log is empty
    pub fn index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded entries, oldest first
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }
}
