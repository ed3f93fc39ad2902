// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between notification timer ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks unconditionally: intercepted log events may arrive at any time and
/// are only presented on a tick.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}
