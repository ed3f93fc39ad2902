// SPDX-License-Identifier: MPL-2.0
//! Sign-in form.
//!
//! The form validates locally and reports problems as [`Event::Invalid`];
//! the application turns those into inline notifications under the
//! offending field. A valid submission is handed back as
//! [`Event::Submitted`].

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{inline, kind, FieldId, InlineAnnotation};
use crate::ui::styles;
use crate::validation::{self, Violation};
use iced::widget::{button, pick_list, text, text_input, Column, Container, Id, Row, Space};
use iced::{alignment, Element, Length};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const ACCOUNT_HASH: &str = "account_hash";

/// Fields in display order.
pub const FIELDS: [&str; 3] = [EMAIL, PASSWORD, ACCOUNT_HASH];

/// Returns the widget ID for a field name, if the form has such a field.
#[must_use]
pub fn widget_id(field: &FieldId) -> Option<Id> {
    FIELDS
        .iter()
        .find(|name| **name == field.as_str())
        .map(|name| Id::new(*name))
}

/// Validated credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub account_hash: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    AccountHashChanged(String),
    Submit,
    PreviewSelected(&'static str),
    Preview,
    DismissAll,
}

/// What the application should do after a form update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Invalid(Violation),
    Submitted(Credentials),
    Preview(&'static str),
    DismissAll,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    account_hash: String,
    preview: Option<&'static str>,
    submitting: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Marks an in-flight submission as finished.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }

    /// Validates the form in field order, stopping at the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<Credentials, Violation> {
        validation::required(&[
            (EMAIL, self.email.as_str()),
            (PASSWORD, self.password.as_str()),
            (ACCOUNT_HASH, self.account_hash.as_str()),
        ])?;
        validation::email(EMAIL, &self.email)?;
        validation::password(PASSWORD, &self.password)?;
        validation::account_hash(ACCOUNT_HASH, &self.account_hash)?;

        Ok(Credentials {
            email: self.email.trim().to_string(),
            account_hash: self.account_hash.trim().to_string(),
        })
    }

    /// Re-submits the last entered values, as the retry button does.
    pub fn resubmit(&mut self) -> Event {
        self.update(Message::Submit)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::AccountHashChanged(value) => {
                self.account_hash = value;
                Event::None
            }
            Message::Submit => {
                if self.submitting {
                    return Event::None;
                }
                match self.validate() {
                    Ok(credentials) => {
                        self.submitting = true;
                        Event::Submitted(credentials)
                    }
                    Err(violation) => Event::Invalid(violation),
                }
            }
            Message::PreviewSelected(key) => {
                self.preview = Some(key);
                Event::None
            }
            Message::Preview => self.preview.map_or(Event::None, Event::Preview),
            Message::DismissAll => Event::DismissAll,
        }
    }

    pub fn view<'a>(&'a self, annotation: Option<&'a InlineAnnotation>) -> Element<'a, Message> {
        let field = |name: &'static str,
                     placeholder: &'static str,
                     value: &'a str,
                     secure: bool,
                     on_input: fn(String) -> Message| {
            let input = text_input(placeholder, value)
                .id(Id::new(name))
                .secure(secure)
                .on_input(on_input)
                .on_submit(Message::Submit)
                .padding(spacing::XS)
                .size(typography::BODY);

            let mut column = Column::new().spacing(spacing::XXS).push(input);
            if let Some(note) = inline::view_for(annotation, &FieldId::new(name)) {
                column = column.push(note);
            }
            column
        };

        let submit_label = if self.submitting {
            "Signing in…"
        } else {
            "Sign in"
        };
        let submit = button(text(submit_label).size(typography::BODY))
            .on_press_maybe((!self.submitting).then_some(Message::Submit))
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fill)
            .style(styles::button::primary);

        let keys: Vec<&'static str> = kind::all().iter().map(|kind| kind.key).collect();
        let preview = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                pick_list(keys, self.preview, Message::PreviewSelected)
                    .placeholder("Preview a notification")
                    .width(Length::Fill),
            )
            .push(
                button(text("Show").size(typography::BODY))
                    .on_press_maybe(self.preview.map(|_| Message::Preview))
                    .style(styles::button::secondary),
            )
            .push(
                button(text("Clear").size(typography::BODY))
                    .on_press(Message::DismissAll)
                    .style(styles::button::secondary),
            );

        let form = Column::new()
            .spacing(spacing::MD)
            .push(text("Sign in to Scanora").size(typography::TITLE_MD))
            .push(field(EMAIL, "Email", &self.email, false, Message::EmailChanged))
            .push(field(
                PASSWORD,
                "Password",
                &self.password,
                true,
                Message::PasswordChanged,
            ))
            .push(field(
                ACCOUNT_HASH,
                "20-character account hash",
                &self.account_hash,
                false,
                Message::AccountHashChanged,
            ))
            .push(submit)
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(preview);

        let card = Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::panel);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XL)
            .into()
    }
}
