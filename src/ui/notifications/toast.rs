// SPDX-License-Identifier: MPL-2.0
//! Toast stack rendering.
//!
//! Toasts are small cards with a severity-colored accent, stacked in the
//! bottom-right corner, oldest on top.

use super::dispatcher::{Dispatcher, Message};
use super::notification::{ToastEntry, ToastPhase};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(entry: &ToastEntry) -> Element<'_, Message> {
        let accent = entry.notification.severity().color();
        let exiting = entry.phase == ToastPhase::Exiting;

        let icon = icons::sized(entry.icon(), sizing::ICON_MD).color(accent);
        let message = Text::new(entry.notification.message()).size(typography::BODY);

        let dismiss = button(icons::cross(sizing::ICON_SM))
            .on_press(Message::Dismiss(entry.notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        // [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::container::toast(theme, accent, exiting))
            .into()
    }

    /// Renders every toast, positioned in the bottom-right corner.
    pub fn view_overlay(dispatcher: &Dispatcher) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = dispatcher.toasts().map(Self::view).collect();

        if toasts.is_empty() {
            return container(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}
