// SPDX-License-Identifier: MPL-2.0
//! Glyph icons for notification surfaces.
//!
//! Kinds carry a symbolic icon name. This module maps those names to
//! Unicode glyphs rendered as text, so no image assets are bundled.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let icon = icons::sized(kind.icon, sizing::ICON_MD);
//! ```

use iced::widget::{text, Text};

/// Glyph shown for names with no mapping.
pub const FALLBACK: char = '\u{2139}'; // ℹ

/// Dismiss glyph for toast close buttons.
pub const CROSS: char = '\u{2715}'; // ✕

/// Returns the glyph for a symbolic icon name.
#[must_use]
pub fn glyph(name: &str) -> char {
    match name {
        "envelope" => '\u{2709}',               // ✉
        "lock" => '\u{1F512}',                  // 🔒
        "exclamation-circle" => '\u{2757}',     // ❗
        "user" => '\u{1F464}',                  // 👤
        "key" => '\u{1F511}',                   // 🔑
        "shield" => '\u{1F6E1}',                // 🛡
        "clock" => '\u{23F1}',                  // ⏱
        "search" => '\u{1F50D}',                // 🔍
        "filter" => '\u{25BD}',                 // ▽
        "server" => '\u{1F5A5}',                // 🖥
        "gauge" => '\u{23F2}',                  // ⏲
        "database" => '\u{1F5C4}',              // 🗄
        "wifi" => '\u{1F4F6}',                  // 📶
        "ban" => '\u{1F6AB}',                   // 🚫
        "warning" => '\u{26A0}',                // ⚠
        "info" => FALLBACK,
        "check-circle" => '\u{2714}',           // ✔
        "times-circle" => '\u{2716}',           // ✖
        _ => FALLBACK,
    }
}

/// Returns whether `name` has a dedicated glyph.
#[must_use]
pub fn is_known(name: &str) -> bool {
    name == "info" || glyph(name) != FALLBACK
}

/// Creates a glyph text widget at the given size.
pub fn sized<'a>(name: &str, size: f32) -> Text<'a> {
    text(glyph(name).to_string()).size(size)
}

/// Creates the dismiss glyph at the given size.
pub fn cross<'a>(size: f32) -> Text<'a> {
    text(CROSS.to_string()).size(size)
}
