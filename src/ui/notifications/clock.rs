// SPDX-License-Identifier: MPL-2.0
//! Time source for notification timers.

use std::fmt;
use std::time::Instant;

/// Monotonic time source.
pub trait Clock: fmt::Debug {
    fn now(&self) -> Instant;
}

/// Reads the system monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
