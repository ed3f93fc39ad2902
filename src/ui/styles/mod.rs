// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the notification surfaces and the form.

pub mod button;
pub mod container;
