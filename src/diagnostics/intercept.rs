// SPDX-License-Identifier: MPL-2.0
//! Interception of log traffic and process-wide failures.
//!
//! The [`InterceptingSink`] decorates another sink: every record is still
//! written to the wrapped sink, and error/warning records are additionally
//! queued for the notification dispatcher. Panics and unhandled background
//! failures reach the same queue through [`DiagnosticsHandle`].

use super::{InterceptSource, Intercepted, Level, LogRecord, LogSink};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Capacity of the interception queue. Events beyond it are dropped.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Creates the interception queue.
#[must_use]
pub fn channel() -> (Sender<Intercepted>, Receiver<Intercepted>) {
    crossbeam_channel::bounded(DEFAULT_CHANNEL_CAPACITY)
}

/// Formats auxiliary values for logging.
#[must_use]
pub fn format_details(details: &[&dyn fmt::Debug]) -> Vec<String> {
    details.iter().map(|detail| format!("{detail:?}")).collect()
}

/// Sink decorator that forwards to the wrapped sink and routes error and
/// warning records into the interception queue.
pub struct InterceptingSink {
    inner: Arc<dyn LogSink>,
    event_tx: Sender<Intercepted>,
}

impl InterceptingSink {
    #[must_use]
    pub fn new(inner: Arc<dyn LogSink>, event_tx: Sender<Intercepted>) -> Self {
        Self { inner, event_tx }
    }
}

impl LogSink for InterceptingSink {
    fn write(&self, record: &LogRecord) {
        let source = match record.level {
            Level::Error => Some(InterceptSource::ErrorLog),
            Level::Warn => Some(InterceptSource::WarningLog),
            Level::Info | Level::Debug => None,
        };

        if let Some(source) = source {
            // Non-blocking send - drop if channel is full
            let _ = self.event_tx.try_send(Intercepted {
                source,
                message: record.message.clone(),
                details: record.details.clone(),
            });
        }

        self.inner.write(record);
    }
}

/// Application-facing logger.
///
/// Cheap to clone and safe to share across threads. Records go through the
/// intercepting sink, so errors and warnings logged here also surface as
/// notifications.
#[derive(Clone)]
pub struct DiagnosticsHandle {
    sink: Arc<dyn LogSink>,
    event_tx: Sender<Intercepted>,
}

impl fmt::Debug for DiagnosticsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticsHandle")
            .field("pending", &self.event_tx.len())
            .finish_non_exhaustive()
    }
}

impl DiagnosticsHandle {
    /// Builds a handle whose sink intercepts into `event_tx` and forwards to `inner`.
    #[must_use]
    pub fn new(inner: Arc<dyn LogSink>, event_tx: Sender<Intercepted>) -> Self {
        let sink: Arc<dyn LogSink> = Arc::new(InterceptingSink::new(inner, event_tx.clone()));
        Self { sink, event_tx }
    }

    /// Returns the intercepting sink, for code that wants a plain [`LogSink`].
    #[must_use]
    pub fn sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.sink)
    }

    pub fn log(&self, level: Level, message: impl Into<String>, details: &[&dyn fmt::Debug]) {
        self.sink
            .write(&LogRecord::new(level, message, format_details(details)));
    }

    pub fn error(&self, message: impl Into<String>, details: &[&dyn fmt::Debug]) {
        self.log(Level::Error, message, details);
    }

    pub fn warn(&self, message: impl Into<String>, details: &[&dyn fmt::Debug]) {
        self.log(Level::Warn, message, details);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message, &[]);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message, &[]);
    }

    /// Reports a background failure that nobody handled.
    ///
    /// This method is non-blocking and drops the event if the queue is full.
    pub fn report_rejection(&self, reason: impl fmt::Display) {
        let _ = self.try_report(Intercepted {
            source: InterceptSource::Rejection,
            message: "Unhandled task failure".to_string(),
            details: vec![reason.to_string()],
        });
    }

    /// Reports a panic with its payload message and source location.
    pub fn report_panic(&self, message: String, location: Option<String>) {
        let _ = self.try_report(Intercepted {
            source: InterceptSource::Panic,
            message: "Unexpected panic".to_string(),
            details: std::iter::once(message).chain(location).collect(),
        });
    }

    /// Attempts to queue an event, returning an error if the queue is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the queue is full, or
    /// `TrySendError::Disconnected` if the dispatcher has been dropped.
    pub fn try_report(&self, event: Intercepted) -> Result<(), TrySendError<Intercepted>> {
        self.event_tx.try_send(event)
    }
}

/// Extracts the human-readable part of a panic payload.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Routes panics into the dispatcher as uncaught errors.
///
/// The previously installed hook still runs after the event is queued, so
/// the usual panic output is preserved.
pub fn install_panic_hook(handle: DiagnosticsHandle) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
        handle.report_panic(panic_message(info.payload()), location);
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    fn handle_with_memory() -> (DiagnosticsHandle, Arc<MemorySink>, Receiver<Intercepted>) {
        let memory = Arc::new(MemorySink::default());
        let (tx, rx) = channel();
        let handle = DiagnosticsHandle::new(memory.clone(), tx);
        (handle, memory, rx)
    }

    #[test]
    fn error_is_forwarded_once_and_intercepted_once() {
        let (handle, memory, rx) = handle_with_memory();

        handle.error("upload failed", &[&404]);

        let records = memory.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "upload failed");
        assert_eq!(records[0].details, vec!["404".to_string()]);

        let event = rx.try_recv().expect("error should be intercepted");
        assert_eq!(event.source, InterceptSource::ErrorLog);
        assert_eq!(event.message, "upload failed");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn warning_is_intercepted_as_warning() {
        let (handle, _memory, rx) = handle_with_memory();
        handle.warn("slow response", &[]);
        assert_eq!(
            rx.try_recv().map(|e| e.source),
            Ok(InterceptSource::WarningLog)
        );
    }

    #[test]
    fn info_and_debug_are_forwarded_but_not_intercepted() {
        let (handle, memory, rx) = handle_with_memory();
        handle.info("started");
        handle.debug("tick");
        assert_eq!(memory.len(), 2);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn rejection_is_queued_with_reason() {
        let (handle, memory, rx) = handle_with_memory();
        handle.report_rejection("connection reset");

        let event = rx.try_recv().expect("rejection should be queued");
        assert_eq!(event.source, InterceptSource::Rejection);
        assert_eq!(event.details, vec!["connection reset".to_string()]);
        assert!(memory.is_empty(), "reports are not log records");
    }

    #[test]
    fn full_queue_drops_events_without_blocking() {
        let (handle, memory, rx) = handle_with_memory();
        for i in 0..(DEFAULT_CHANNEL_CAPACITY + 10) {
            handle.error(format!("e{i}"), &[]);
        }
        assert_eq!(rx.len(), DEFAULT_CHANNEL_CAPACITY);
        assert_eq!(memory.len(), DEFAULT_CHANNEL_CAPACITY + 10);
    }

    #[test]
    fn panic_message_handles_str_and_string_payloads() {
        let s: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(s.as_ref()), "static message");

        let owned: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(owned.as_ref()), "owned message");

        let other: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
    }

    #[test]
    fn format_details_uses_debug_representation() {
        assert_eq!(
            format_details(&[&"a", &7, &Some(1)]),
            vec!["\"a\"".to_string(), "7".to_string(), "Some(1)".to_string()]
        );
    }
}
