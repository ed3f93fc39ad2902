// SPDX-License-Identifier: MPL-2.0
//! Active notification data structures.
//!
//! An [`ActiveNotification`] is created per dispatch and lives until it is
//! dismissed, expires, or is superseded on its surface.

use super::kind::{Action, NotificationKind};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines styling and, for modals, auto-dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue).
    #[default]
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph name used for toasts of this severity.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "times-circle",
        }
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    /// Playing the exit transition; removed when it ends.
    Exiting,
}

/// What a modal button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Dismiss,
    Retry,
    ContactSupport,
}

/// A labelled modal button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalButton {
    pub label: &'static str,
    pub action: ButtonAction,
}

/// Button layout of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalButtons {
    pub primary: ModalButton,
    pub secondary: Option<ModalButton>,
}

impl ModalButtons {
    /// Returns the button layout offered for a kind's action.
    #[must_use]
    pub fn for_action(action: Action) -> Self {
        let dismiss = |label| ModalButton {
            label,
            action: ButtonAction::Dismiss,
        };

        match action {
            Action::Retry => Self {
                primary: ModalButton {
                    label: "Retry",
                    action: ButtonAction::Retry,
                },
                secondary: Some(dismiss("Cancel")),
            },
            Action::Contact => Self {
                primary: ModalButton {
                    label: "Contact Support",
                    action: ButtonAction::ContactSupport,
                },
                secondary: Some(dismiss("Close")),
            },
            Action::Cooldown | Action::None | Action::Focus | Action::Select => Self {
                primary: dismiss("OK"),
                secondary: None,
            },
        }
    }
}

/// A notification currently presented on some surface.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    id: NotificationId,
    kind: &'static NotificationKind,
    severity: Severity,
    message: String,
    /// Formatted auxiliary values. Logged, never rendered.
    details: Vec<String>,
    created_at: Instant,
}

impl ActiveNotification {
    /// Creates a notification for `kind`.
    ///
    /// An empty `message` falls back to the kind's default message.
    pub fn new(
        kind: &'static NotificationKind,
        message: impl Into<String>,
        details: Vec<String>,
        created_at: Instant,
    ) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.message.to_string()
        } else {
            message
        };

        Self {
            id: NotificationId::new(),
            kind,
            severity: kind.severity,
            message,
            details,
            created_at,
        }
    }

    /// Overrides the kind's severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &'static NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.kind.icon
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification relative to `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}

/// An inline annotation attached to a form field.
#[derive(Debug, Clone)]
pub struct InlineAnnotation {
    pub notification: ActiveNotification,
    pub field: super::FieldId,
}

/// The modal's current content.
#[derive(Debug, Clone)]
pub struct ModalContent {
    pub notification: ActiveNotification,
    pub buttons: ModalButtons,
}

/// A toast in the toast stack.
#[derive(Debug, Clone)]
pub struct ToastEntry {
    pub notification: ActiveNotification,
    pub phase: ToastPhase,
    pub duration: Duration,
}

impl ToastEntry {
    /// Glyph name for the toast, chosen by severity.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.notification.severity().icon()
    }
}
