// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration constants.
//!
//! # Categories
//!
//! - **Notification timers**: inline, modal, toast and focus delays
//! - **Diagnostics**: log ring-buffer capacity

// ==========================================================================
// Notification Timer Defaults (milliseconds)
// ==========================================================================

/// Lifetime of an inline field annotation.
pub const DEFAULT_INLINE_TIMEOUT_MS: u64 = 5000;

/// Auto-dismiss delay for non-error modals.
pub const DEFAULT_MODAL_AUTO_DISMISS_MS: u64 = 8000;

/// Default toast display time.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Length of the toast exit transition.
pub const DEFAULT_TOAST_EXIT_MS: u64 = 300;

/// Delay before focusing an annotated field.
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 100;

/// Lower bound for every display timer above except the focus delay.
pub const MIN_DISPLAY_MS: u64 = 500;

/// Upper bound for every display timer.
pub const MAX_DISPLAY_MS: u64 = 60_000;

/// Upper bound for the toast exit transition and the focus delay.
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the in-memory log buffer.
pub const DEFAULT_LOG_BUFFER_CAPACITY: usize =
    crate::diagnostics::buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_INLINE_TIMEOUT_MS >= MIN_DISPLAY_MS);
    assert!(DEFAULT_INLINE_TIMEOUT_MS <= MAX_DISPLAY_MS);
    assert!(DEFAULT_MODAL_AUTO_DISMISS_MS >= MIN_DISPLAY_MS);
    assert!(DEFAULT_MODAL_AUTO_DISMISS_MS <= MAX_DISPLAY_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_DISPLAY_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_DISPLAY_MS);
    assert!(DEFAULT_TOAST_EXIT_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_FOCUS_DELAY_MS <= MAX_TRANSITION_MS);
    // Focus must land while the annotation is still shown.
    assert!(DEFAULT_FOCUS_DELAY_MS < DEFAULT_INLINE_TIMEOUT_MS);
};
