// SPDX-License-Identifier: MPL-2.0
//! Notification dispatch and lifecycle.
//!
//! The [`Dispatcher`] owns the three presentation surfaces and every
//! deferred timer. It never fails: a dispatch with nowhere to render is a
//! silent no-op for that surface.
//!
//! Timers are cooperative. Each deferred callback is queued with its due
//! instant and fired by [`Dispatcher::tick`], which the shell calls
//! periodically. A timer whose target was already removed (superseded or
//! dismissed) fires against nothing and has no effect.

use super::clock::{Clock, SystemClock};
use super::kind::{self, Action, NotificationKind, Surface};
use super::notification::{
    ActiveNotification, ButtonAction, InlineAnnotation, ModalButtons, ModalContent,
    NotificationId, Severity, ToastEntry, ToastPhase,
};
use super::slot::{ActionSlot, MemorySlot};
use crate::diagnostics::{
    self, format_details, DiagnosticsHandle, Intercepted, Level, LogRecord, LogSink,
};
use crossbeam_channel::Receiver;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Identifier of a form field that can receive inline annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Timer durations used by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Lifetime of an inline annotation.
    pub inline_timeout: Duration,
    /// Auto-dismiss delay for non-error modals.
    pub modal_auto_dismiss: Duration,
    /// Default toast display time.
    pub toast_duration: Duration,
    /// Length of the toast exit transition.
    pub toast_exit: Duration,
    /// Delay between rendering an inline annotation and focusing its field.
    pub focus_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            inline_timeout: Duration::from_millis(5000),
            modal_auto_dismiss: Duration::from_millis(8000),
            toast_duration: Duration::from_millis(4000),
            toast_exit: Duration::from_millis(300),
            focus_delay: Duration::from_millis(100),
        }
    }
}

/// Side effects the shell must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move input focus to the field.
    Focus(FieldId),
    /// The failed-action slot was read and cleared; re-running the action is
    /// up to whoever stored it.
    Retry(String),
    /// The user asked to contact support.
    ContactSupport,
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Clear every surface.
    DismissAll,
    /// A modal button was pressed.
    ModalButton(ButtonAction),
    /// Tick for firing due timers.
    Tick,
}

#[derive(Debug, Clone)]
enum TimerAction {
    ExpireInline(NotificationId),
    Focus(FieldId),
    AutoDismissModal(NotificationId),
    BeginToastExit(NotificationId),
    RemoveToast(NotificationId),
}

#[derive(Debug)]
struct Timer {
    due: Instant,
    seq: u64,
    action: TimerAction,
}

/// Classifies events, presents them, and manages their lifecycle.
pub struct Dispatcher {
    clock: Box<dyn Clock>,
    /// Raw sink; dispatch logging bypasses interception.
    sink: Arc<dyn LogSink>,
    slot: Box<dyn ActionSlot>,
    timings: Timings,
    event_rx: Receiver<Intercepted>,
    inline_target: Option<FieldId>,
    inline: Option<InlineAnnotation>,
    modal: Option<ModalContent>,
    toasts: Vec<ToastEntry>,
    timers: Vec<Timer>,
    next_seq: u64,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("inline", &self.inline.as_ref().map(|a| a.notification.id()))
            .field("modal", &self.modal.as_ref().map(|m| m.notification.id()))
            .field("toasts", &self.toasts.len())
            .field("timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Creates the dispatcher and the diagnostics handle feeding it.
    ///
    /// `sink` is the underlying log destination. The returned handle writes
    /// through an intercepting decorator around it: every record still
    /// reaches `sink`, and error/warning records are also queued here and
    /// presented on the next [`tick`](Self::tick) or
    /// [`process_pending`](Self::process_pending).
    pub fn init(
        timings: Timings,
        sink: Arc<dyn LogSink>,
        slot: Box<dyn ActionSlot>,
        clock: Box<dyn Clock>,
    ) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = diagnostics::channel();
        let handle = DiagnosticsHandle::new(Arc::clone(&sink), event_tx);

        let dispatcher = Self {
            clock,
            sink,
            slot,
            timings,
            event_rx,
            inline_target: None,
            inline: None,
            modal: None,
            toasts: Vec::new(),
            timers: Vec::new(),
            next_seq: 0,
        };

        (dispatcher, handle)
    }

    /// Creates a dispatcher with default timings, an in-memory slot and the
    /// system clock.
    pub fn with_sink(sink: Arc<dyn LogSink>) -> (Self, DiagnosticsHandle) {
        Self::init(
            Timings::default(),
            sink,
            Box::new(MemorySlot::default()),
            Box::new(SystemClock),
        )
    }

    // =========================================================================
    // Inline target registration
    // =========================================================================

    /// Registers the field that receives inline annotations.
    pub fn register_inline_target(&mut self, field: impl Into<FieldId>) {
        self.inline_target = Some(field.into());
    }

    /// Unregisters the inline target. Later inline dispatches are no-ops.
    pub fn clear_inline_target(&mut self) {
        self.inline_target = None;
    }

    #[must_use]
    pub fn inline_target(&self) -> Option<&FieldId> {
        self.inline_target.as_ref()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Presents the kind registered under `key`.
    ///
    /// Unknown keys fall back to the generic kind. An empty `message` uses
    /// the kind's default text. `details` are only logged.
    pub fn dispatch(
        &mut self,
        key: &str,
        message: impl Into<String>,
        details: &[&dyn fmt::Debug],
    ) {
        let kind = kind::resolve(key);
        let notification =
            ActiveNotification::new(kind, message, format_details(details), self.clock.now());
        self.log_dispatch(&dispatch_label(key, kind), &notification);
        self.present(notification);
    }

    /// Shows a success toast.
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show_toast(message, Severity::Success, None);
    }

    /// Shows a warning toast.
    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show_toast(message, Severity::Warning, None);
    }

    /// Appends a toast. `duration` defaults to the configured toast duration.
    pub fn show_toast(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) {
        let notification =
            ActiveNotification::new(kind::unknown(), message, Vec::new(), self.clock.now())
                .with_severity(severity);
        self.push_toast(notification, duration.unwrap_or(self.timings.toast_duration));
    }

    fn present(&mut self, notification: ActiveNotification) {
        match notification.kind().surface() {
            Surface::Inline => self.show_inline(notification),
            Surface::Modal => self.show_modal(notification),
            Surface::Toast => {
                let duration = self.timings.toast_duration;
                self.push_toast(notification, duration);
            }
        }
    }

    fn show_inline(&mut self, notification: ActiveNotification) {
        self.inline = None;

        let Some(field) = self.inline_target.clone() else {
            return;
        };

        let created_at = notification.created_at();
        self.schedule(
            created_at + self.timings.inline_timeout,
            TimerAction::ExpireInline(notification.id()),
        );
        if notification.kind().action == Action::Focus {
            self.schedule(
                created_at + self.timings.focus_delay,
                TimerAction::Focus(field.clone()),
            );
        }

        self.inline = Some(InlineAnnotation {
            notification,
            field,
        });
    }

    fn show_modal(&mut self, notification: ActiveNotification) {
        if notification.severity() != Severity::Error {
            self.schedule(
                notification.created_at() + self.timings.modal_auto_dismiss,
                TimerAction::AutoDismissModal(notification.id()),
            );
        }

        let buttons = ModalButtons::for_action(notification.kind().action);
        self.modal = Some(ModalContent {
            notification,
            buttons,
        });
    }

    fn push_toast(&mut self, notification: ActiveNotification, duration: Duration) {
        let id = notification.id();
        let exit_at = notification.created_at() + duration;
        self.schedule(exit_at, TimerAction::BeginToastExit(id));
        self.schedule(exit_at + self.timings.toast_exit, TimerAction::RemoveToast(id));

        self.toasts.push(ToastEntry {
            notification,
            phase: ToastPhase::Shown,
            duration,
        });
    }

    fn handle_intercepted(&mut self, event: Intercepted) {
        if event.source.is_uncaught() {
            let kind = kind::uncaught();
            let details = std::iter::once(event.message).chain(event.details).collect();
            let notification = ActiveNotification::new(kind, "", details, self.clock.now());
            self.log_dispatch(kind.key, &notification);
            self.present(notification);
            return;
        }

        let severity = match event.source {
            diagnostics::InterceptSource::WarningLog => Severity::Warning,
            _ => Severity::Error,
        };
        let kind = kind::unknown();
        let notification =
            ActiveNotification::new(kind, event.message, event.details, self.clock.now())
                .with_severity(severity);
        self.log_dispatch(kind.key, &notification);
        self.present(notification);
    }

    /// Presents every intercepted event queued since the last call.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_intercepted(event);
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    fn schedule(&mut self, due: Instant, action: TimerAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer { due, seq, action });
    }

    /// Presents queued intercepted events, then fires every due timer in
    /// due order. Returns the effects the shell must carry out.
    pub fn tick(&mut self) -> Vec<Effect> {
        self.process_pending();

        let now = self.clock.now();
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|timer| timer.due <= now);
        self.timers = pending;
        due.sort_by_key(|timer| (timer.due, timer.seq));

        let mut effects = Vec::new();
        for timer in due {
            match timer.action {
                TimerAction::ExpireInline(id) => {
                    if self
                        .inline
                        .as_ref()
                        .is_some_and(|a| a.notification.id() == id)
                    {
                        self.inline = None;
                    }
                }
                TimerAction::Focus(field) => effects.push(Effect::Focus(field)),
                TimerAction::AutoDismissModal(id) => {
                    if self
                        .modal
                        .as_ref()
                        .is_some_and(|m| m.notification.id() == id)
                    {
                        self.modal = None;
                    }
                }
                TimerAction::BeginToastExit(id) => {
                    if let Some(toast) = self
                        .toasts
                        .iter_mut()
                        .find(|t| t.notification.id() == id)
                    {
                        toast.phase = ToastPhase::Exiting;
                    }
                }
                TimerAction::RemoveToast(id) => {
                    self.toasts.retain(|t| t.notification.id() != id);
                }
            }
        }

        effects
    }

    /// Returns the number of timers not yet fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // =========================================================================
    // Dismissal
    // =========================================================================

    /// Dismisses a notification by its ID, on whichever surface it is.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self
            .inline
            .as_ref()
            .is_some_and(|a| a.notification.id() == id)
        {
            self.inline = None;
            return true;
        }

        if self
            .modal
            .as_ref()
            .is_some_and(|m| m.notification.id() == id)
        {
            self.modal = None;
            return true;
        }

        let before = self.toasts.len();
        self.toasts.retain(|t| t.notification.id() != id);
        self.toasts.len() < before
    }

    /// Hides the modal, removes the inline annotation and every toast.
    ///
    /// Toasts are removed immediately, without their exit transition.
    pub fn dismiss_all(&mut self) {
        self.modal = None;
        self.inline = None;
        self.toasts.clear();
    }

    /// Handles a modal button press.
    pub fn press(&mut self, action: ButtonAction) -> Option<Effect> {
        self.modal = None;
        match action {
            ButtonAction::Dismiss => None,
            ButtonAction::Retry => self.retry().map(Effect::Retry),
            ButtonAction::ContactSupport => Some(Effect::ContactSupport),
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) -> Vec<Effect> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
                Vec::new()
            }
            Message::DismissAll => {
                self.dismiss_all();
                Vec::new()
            }
            Message::ModalButton(action) => self.press(*action).into_iter().collect(),
            Message::Tick => self.tick(),
        }
    }

    // =========================================================================
    // Failed-action slot
    // =========================================================================

    /// Remembers `action_id` as the operation to retry, replacing any
    /// previous one.
    pub fn store_failed_action(&mut self, action_id: &str) {
        if let Err(err) = self.slot.set(Some(action_id)) {
            self.log(Level::Warn, "Failed to persist failed action", vec![err.to_string()]);
        }
    }

    /// Reads and clears the failed-action slot.
    ///
    /// Returns the stored identifier so the caller can re-run it; nothing is
    /// re-run here. Returns `None` (and does nothing) when the slot is empty.
    pub fn retry(&mut self) -> Option<String> {
        let action_id = self.slot.get()?;
        self.log(
            Level::Info,
            format!("Retrying last action: {action_id}"),
            Vec::new(),
        );
        if let Err(err) = self.slot.set(None) {
            self.log(Level::Warn, "Failed to clear failed action", vec![err.to_string()]);
        }
        Some(action_id)
    }

    /// Returns the stored failed action without clearing it.
    #[must_use]
    pub fn failed_action(&self) -> Option<String> {
        self.slot.get()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn inline(&self) -> Option<&InlineAnnotation> {
        self.inline.as_ref()
    }

    #[must_use]
    pub fn modal(&self) -> Option<&ModalContent> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn is_modal_visible(&self) -> bool {
        self.modal.is_some()
    }

    /// Returns the toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &ToastEntry> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether anything is presented or waiting to fire.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.inline.is_some()
            || self.modal.is_some()
            || !self.toasts.is_empty()
            || !self.timers.is_empty()
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    // =========================================================================
    // Logging
    // =========================================================================

    fn log(&self, level: Level, message: impl Into<String>, details: Vec<String>) {
        self.sink.write(&LogRecord::new(level, message, details));
    }

    fn log_dispatch(&self, label: &str, notification: &ActiveNotification) {
        let level = match notification.severity() {
            Severity::Error => Level::Error,
            Severity::Warning => Level::Warn,
            Severity::Info | Severity::Success => Level::Info,
        };
        self.log(
            level,
            format!("[{label}] {}", notification.message()),
            notification.details().to_vec(),
        );
    }
}

/// Log label for a dispatch: the registered key, or the fallback key with
/// the unmatched key appended.
fn dispatch_label(key: &str, kind: &NotificationKind) -> String {
    if key == kind.key || key.is_empty() {
        kind.key.to_string()
    } else {
        format!("{}: {key}", kind.key)
    }
}
