// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`notifications`] - Dispatcher, kind registry and the three surfaces
//! - [`sign_in`] - The sign-in form whose validation feeds the dispatcher
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Button and container styles
//! - [`theming`] - Light/Dark/System theme mode
//! - [`icons`] - Glyphs for symbolic icon names

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod sign_in;
pub mod styles;
pub mod theming;
