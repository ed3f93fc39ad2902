// SPDX-License-Identifier: MPL-2.0
//! Modal dialog rendering.

use super::dispatcher::Message;
use super::notification::{ModalButton, ModalContent};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, opaque, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

fn modal_button(spec: ModalButton, primary: bool) -> Element<'static, Message> {
    let style = if primary {
        styles::button::primary
    } else {
        styles::button::secondary
    };

    button(text(spec.label).size(typography::BODY))
        .on_press(Message::ModalButton(spec.action))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}

/// Renders the modal centered over a dimmed, input-blocking backdrop.
pub fn view(content: &ModalContent) -> Element<'_, Message> {
    let notification = &content.notification;
    let accent = notification.severity().color();

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(notification.icon(), sizing::ICON_LG).color(accent))
        .push(text(notification.title()).size(typography::TITLE_MD));

    let mut buttons = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill));
    if let Some(secondary) = content.buttons.secondary {
        buttons = buttons.push(modal_button(secondary, false));
    }
    buttons = buttons.push(modal_button(content.buttons.primary, true));

    let card = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(text(notification.message()).size(typography::BODY))
        .push(buttons);

    let dialog = Container::new(card)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel);

    opaque(
        container(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::scrim),
    )
}
