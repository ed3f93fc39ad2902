// SPDX-License-Identifier: MPL-2.0
//! Log sinks.
//!
//! A [`LogSink`] is the destination of diagnostic records. The dispatcher
//! receives one at initialization instead of reaching for a global logger.

use super::{BufferCapacity, CircularBuffer, Level, LogRecord};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for diagnostic records.
///
/// Implementations must not fail: a sink that cannot write drops the record.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &LogRecord);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, record: &LogRecord) {
        (**self).write(record);
    }
}

/// Writes every record to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink {
    /// Records below this level are skipped.
    pub min_level: Option<Level>,
}

impl StderrSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(level: Level) -> Self {
        Self {
            min_level: Some(level),
        }
    }
}

impl LogSink for StderrSink {
    fn write(&self, record: &LogRecord) {
        if self.min_level.is_some_and(|min| record.level < min) {
            return;
        }
        eprintln!("{record}");
    }
}

/// Keeps the most recent records in memory.
#[derive(Debug)]
pub struct MemorySink {
    records: Mutex<CircularBuffer<LogRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            records: Mutex::new(CircularBuffer::new(capacity)),
        }
    }

    /// Returns a snapshot of the stored records, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.iter().cloned().collect()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many older records were dropped to stay within capacity.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .evicted()
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord) {
        // A poisoned lock only means another writer panicked mid-push; the
        // buffer itself is still consistent.
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

/// Writes each record to every wrapped sink, in order.
pub struct FanoutSink {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl FanoutSink {
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

impl LogSink for FanoutSink {
    fn write(&self, record: &LogRecord) {
        for sink in &self.sinks {
            sink.write(record);
        }
    }
}
