// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used by the form and the modal dialog.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Dimmed backdrop behind the modal.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Toast card with a severity accent border. Exiting toasts are faded.
pub fn toast(theme: &Theme, accent: Color, exiting: bool) -> container::Style {
    let base = theme.extended_palette().background.base;
    let alpha = if exiting {
        opacity::EXITING
    } else {
        opacity::OPAQUE
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..base.color
        })),
        border: Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: alpha,
            ..base.text
        }),
        ..Default::default()
    }
}

/// Annotation box under a form field.
pub fn annotation(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_style_uses_accent_color() {
        let style = toast(&Theme::Dark, palette::SUCCESS_500, false);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn exiting_toast_is_faded() {
        let shown = toast(&Theme::Light, palette::ERROR_500, false);
        let exiting = toast(&Theme::Light, palette::ERROR_500, true);
        assert!(exiting.border.color.a < shown.border.color.a);
    }

    #[test]
    fn scrim_is_translucent() {
        let style = scrim(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a > 0.0 && color.a < 1.0),
            other => panic!("unexpected scrim background: {other:?}"),
        }
    }
}
