// SPDX-License-Identifier: MPL-2.0
//! View composition: the form with toast and modal overlays stacked on top.

use super::Message;
use crate::ui::notifications::{self, Dispatcher, Toast};
use crate::ui::sign_in;
use iced::widget::Stack;
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub sign_in: &'a sign_in::State,
    pub notifications: &'a Dispatcher,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = ctx
        .sign_in
        .view(ctx.notifications.inline())
        .map(Message::SignIn);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(form)
        .push(toasts);

    if let Some(modal) = ctx.notifications.modal() {
        stack = stack.push(notifications::modal::view(modal).map(Message::Notification));
    }

    stack.into()
}
