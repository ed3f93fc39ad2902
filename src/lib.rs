// SPDX-License-Identifier: MPL-2.0
//! `scanora` is the notification and error presentation layer of the
//! Scanora desktop client, built with the Iced GUI framework.
//!
//! Every user-visible problem or confirmation goes through one
//! [`Dispatcher`](ui::notifications::Dispatcher), which classifies it
//! against a static registry of kinds and presents it as a modal dialog,
//! an inline field annotation, or a toast. Error and warning logs, panics
//! and failed background tasks are intercepted through
//! [`diagnostics`] and surface the same way.

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod ui;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
