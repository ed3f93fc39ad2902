// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for retaining recent log records.
//!
//! The in-memory sink keeps the last N records so the shell (and tests) can
//! inspect what was logged without unbounded growth.

use std::collections::VecDeque;

/// Buffer capacity bounds (16 to 10000 records).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 16;
    /// Maximum buffer capacity.
    pub const MAX: usize = 10_000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

/// Capacity of a [`CircularBuffer`], clamped to
/// [`buffer_capacity_bounds::MIN`]..=[`buffer_capacity_bounds::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

/// Fixed-capacity record store; the oldest record is evicted when full.
///
/// Records are kept oldest first. The buffer counts how many records it has
/// evicted so a support report can say how much history is missing.
///
/// # Example
///
/// ```
/// use scanora::diagnostics::{CircularBuffer, Level, LogRecord};
///
/// let mut records = CircularBuffer::with_raw_capacity(2);
/// records.push(LogRecord::new(Level::Info, "booted", Vec::new()));
/// records.push(LogRecord::new(Level::Warn, "slow response", Vec::new()));
/// records.push(LogRecord::new(Level::Error, "[API_TIMEOUT] search", Vec::new()));
///
/// let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
/// assert_eq!(messages, ["slow response", "[API_TIMEOUT] search"]);
/// assert_eq!(records.evicted(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer without clamping `capacity` to the configured
    /// bounds. A zero capacity is raised to one.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
            self.evicted += 1;
        }
        self.data.push_back(item);
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many records were pushed out since creation or the last
    /// [`clear`](Self::clear).
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Level, LogRecord};

    fn record(message: &str) -> LogRecord {
        LogRecord::new(Level::Info, message, Vec::new())
    }

    fn messages(buffer: &CircularBuffer<LogRecord>) -> Vec<String> {
        buffer.iter().map(|r| r.message.clone()).collect()
    }

    #[test]
    fn capacity_is_clamped_to_bounds() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            buffer_capacity_bounds::MAX
        );
        assert_eq!(
            BufferCapacity::default().value(),
            buffer_capacity_bounds::DEFAULT
        );
    }

    #[test]
    fn full_buffer_drops_oldest_records_and_counts_them() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for message in ["[INVALID_EMAIL]", "[RATE_LIMIT]", "[API_TIMEOUT]", "retry", "done"] {
            buffer.push(record(message));
        }

        assert_eq!(messages(&buffer), ["[API_TIMEOUT]", "retry", "done"]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.evicted(), 2);
    }

    #[test]
    fn zero_raw_capacity_keeps_latest_record() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push(record("first"));
        buffer.push(record("second"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(messages(&buffer), ["second"]);
    }

    #[test]
    fn clear_resets_records_and_eviction_count() {
        let mut buffer = CircularBuffer::with_raw_capacity(1);
        buffer.push(record("a"));
        buffer.push(record("b"));
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.evicted(), 0);
    }
}
