// SPDX-License-Identifier: MPL-2.0
//! Notification and error presentation.
//!
//! Every user-visible problem or confirmation is routed through one
//! [`Dispatcher`], which picks one of three surfaces from the kind's
//! category:
//!
//! - **Modal**: a blocking dialog, one at a time, with action buttons
//! - **Inline**: an annotation under the registered form field, one at a time
//! - **Toast**: transient cards in the bottom-right corner; toasts accumulate
//!
//! # Components
//!
//! - [`kind`] - Static registry of notification kinds
//! - [`notification`] - Presented notification data
//! - [`dispatcher`] - Classification, routing and timers
//! - [`slot`] - The failed-action slot backing the retry button
//! - [`clock`] - Time source for timers
//! - [`toast`], [`modal`], [`inline`] - Rendering
//!
//! # Usage
//!
//! ```ignore
//! let (mut dispatcher, diagnostics) = Dispatcher::with_sink(sink);
//! dispatcher.register_inline_target("email");
//!
//! dispatcher.dispatch("INVALID_EMAIL", "", &[]);
//! dispatcher.show_success("Profile saved");
//!
//! // Periodically:
//! for effect in dispatcher.tick() { /* focus fields, re-run actions */ }
//! ```

pub mod clock;
pub mod dispatcher;
pub mod inline;
pub mod kind;
pub mod modal;
pub mod notification;
pub mod slot;
pub mod toast;

pub use clock::{Clock, SystemClock};
pub use dispatcher::{Dispatcher, Effect, FieldId, Message as NotificationMessage, Timings};
pub use kind::{Action, Category, NotificationKind, Surface};
pub use notification::{
    ActiveNotification, ButtonAction, InlineAnnotation, ModalButton, ModalButtons, ModalContent,
    NotificationId, Severity, ToastEntry, ToastPhase,
};
pub use slot::{ActionSlot, MemorySlot, PersistedSlot};
pub use toast::Toast;
