// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging for the notification layer.
//!
//! Nothing in this crate writes to a global logger. Components receive a
//! [`LogSink`] and write [`LogRecord`]s to it; the application decides where
//! records end up (stderr, memory, both).
//!
//! # Architecture
//!
//! - [`LogSink`]: destination trait, with [`StderrSink`], [`MemorySink`]
//!   and [`FanoutSink`] implementations
//! - [`InterceptingSink`]: decorator that forwards every record and queues
//!   error/warning records for the dispatcher
//! - [`DiagnosticsHandle`]: cloneable logger handed to the rest of the app;
//!   also reports panics and unhandled background failures
//! - [`CircularBuffer`]: bounded storage behind [`MemorySink`]
//! - [`support_report`]: plain-text dump of buffered records

mod buffer;
mod events;
mod intercept;
mod report;
mod sink;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use events::{InterceptSource, Intercepted, Level, LogRecord};
pub use intercept::{
    channel, format_details, install_panic_hook, panic_message, DiagnosticsHandle,
    InterceptingSink,
};
pub use report::{support_report, MAX_REPORT_BYTES};
pub use sink::{FanoutSink, LogSink, MemorySink, StderrSink};
