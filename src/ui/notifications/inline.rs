// SPDX-License-Identifier: MPL-2.0
//! Inline annotation rendering.

use super::dispatcher::FieldId;
use super::notification::InlineAnnotation;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{text, Container, Row};
use iced::{alignment, Element, Length};

/// Renders the annotation if it is attached to `field`.
pub fn view_for<'a, M: 'a>(
    annotation: Option<&'a InlineAnnotation>,
    field: &FieldId,
) -> Option<Element<'a, M>> {
    let annotation = annotation.filter(|a| &a.field == field)?;
    let notification = &annotation.notification;
    let accent = notification.severity().color();

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(notification.icon(), sizing::ICON_SM))
        .push(text(notification.message()).size(typography::CAPTION));

    Some(
        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::annotation(accent))
            .into(),
    )
}
