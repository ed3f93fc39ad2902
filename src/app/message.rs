// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::sign_in;
use std::time::Instant;

/// Outcome of a sign-in request that reached the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    Accepted,
    Rejected,
    Locked,
    Unavailable,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    SignIn(sign_in::Message),
    Notification(notifications::NotificationMessage),
    /// A sign-in request finished. `Err` means the task itself failed.
    SignInFinished(Result<SignInOutcome, String>),
    /// Periodic tick driving notification timers.
    Tick(Instant),
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Data directory override (for `state.cbor`).
    /// Takes precedence over `SCANORA_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Config directory override (for `settings.toml`).
    /// Takes precedence over `SCANORA_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Kind key to dispatch once at startup.
    pub preview: Option<String>,
}
