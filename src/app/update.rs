// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::message::SignInOutcome;
use super::{App, Message};
use crate::diagnostics;
use crate::ui::notifications::{Effect, Severity};
use crate::ui::sign_in::{self, Credentials, Event};
use chrono::Utc;
use iced::widget::operation;
use iced::Task;
use std::time::Duration;

/// Failed-action identifier stored when a sign-in can be retried.
pub const SIGN_IN_ACTION: &str = "sign-in";

/// Rejected attempts before the form reports too many attempts.
pub const MAX_ATTEMPTS: u32 = 3;

pub const SUPPORT_CONTACT: &str =
    "Contact support at support@scanora.io. Recent diagnostics were copied to the clipboard.";

/// Stand-in for the authentication service; no backend is wired in.
///
/// The account hash prefix selects the outcome so every path can be
/// exercised by hand: `LOCKED…`, `OFFLINE…`, `REJECT…`, `CRASH…`.
pub fn simulate_sign_in(credentials: &Credentials) -> Result<SignInOutcome, String> {
    let hash = credentials.account_hash.to_uppercase();
    if hash.starts_with("CRASH") {
        Err("connection reset by peer".to_string())
    } else if hash.starts_with("LOCKED") {
        Ok(SignInOutcome::Locked)
    } else if hash.starts_with("OFFLINE") {
        Ok(SignInOutcome::Unavailable)
    } else if hash.starts_with("REJECT") {
        Ok(SignInOutcome::Rejected)
    } else {
        Ok(SignInOutcome::Accepted)
    }
}

impl App {
    pub(super) fn handle_sign_in(&mut self, message: sign_in::Message) -> Task<Message> {
        let event = self.sign_in.update(message);
        self.handle_form_event(event)
    }

    pub(super) fn handle_form_event(&mut self, event: Event) -> Task<Message> {
        match event {
            Event::None => Task::none(),
            Event::Invalid(violation) => {
                self.notifications.register_inline_target(violation.field);
                self.notifications.dispatch(violation.kind, "", &[]);
                Task::none()
            }
            Event::Submitted(credentials) => {
                self.diagnostics.info(format!("Signing in {}", credentials.email));
                Task::perform(
                    async move { simulate_sign_in(&credentials) },
                    Message::SignInFinished,
                )
            }
            Event::Preview(key) => {
                self.preview(key);
                Task::none()
            }
            Event::DismissAll => {
                self.notifications.dismiss_all();
                Task::none()
            }
        }
    }

    pub(super) fn handle_sign_in_finished(
        &mut self,
        result: Result<SignInOutcome, String>,
    ) -> Task<Message> {
        self.sign_in.finish_submission();
        let email = self.sign_in.email().to_string();

        match result {
            Ok(SignInOutcome::Accepted) => {
                self.failed_attempts = 0;
                self.notifications
                    .show_success(format!("Signed in as {email}"));
            }
            Ok(SignInOutcome::Rejected) => {
                self.failed_attempts += 1;
                if self.failed_attempts >= MAX_ATTEMPTS {
                    self.notifications
                        .dispatch("TOO_MANY_ATTEMPTS", "", &[&self.failed_attempts]);
                } else {
                    self.notifications.store_failed_action(SIGN_IN_ACTION);
                    self.notifications
                        .dispatch("INVALID_CREDENTIALS", "", &[&email]);
                }
            }
            Ok(SignInOutcome::Locked) => {
                self.notifications.dispatch("ACCOUNT_LOCKED", "", &[&email]);
            }
            Ok(SignInOutcome::Unavailable) => {
                self.notifications.store_failed_action(SIGN_IN_ACTION);
                self.notifications.dispatch("API_UNAVAILABLE", "", &[&email]);
            }
            Err(reason) => self.diagnostics.report_rejection(reason),
        }

        Task::none()
    }

    pub(super) fn apply_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| self.apply_effect(effect))
            .collect();
        Task::batch(tasks)
    }

    fn apply_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Focus(field) => match sign_in::widget_id(&field) {
                Some(id) => operation::focus(id),
                None => Task::none(),
            },
            Effect::Retry(action) if action == SIGN_IN_ACTION => {
                let event = self.sign_in.resubmit();
                self.handle_form_event(event)
            }
            Effect::Retry(action) => {
                self.diagnostics
                    .info(format!("No handler registered for retried action {action}"));
                Task::none()
            }
            Effect::ContactSupport => {
                let report = diagnostics::support_report(
                    &self.log.records(),
                    self.log.evicted(),
                    Utc::now(),
                );
                self.notifications.show_toast(
                    SUPPORT_CONTACT,
                    Severity::Info,
                    Some(Duration::from_secs(6)),
                );
                iced::clipboard::write(report)
            }
        }
    }

    /// Dispatches `key` with its default message, for previewing kinds.
    pub(super) fn preview(&mut self, key: &str) {
        if self.notifications.inline_target().is_none() {
            self.notifications.register_inline_target(sign_in::EMAIL);
        }
        self.notifications.dispatch(key, "", &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(hash: &str) -> Credentials {
        Credentials {
            email: "analyst@scanora.io".into(),
            account_hash: hash.into(),
        }
    }

    #[test]
    fn simulated_outcomes_follow_hash_prefix() {
        assert_eq!(
            simulate_sign_in(&credentials("ABCDEFGHIJKLMNOPQRST")),
            Ok(SignInOutcome::Accepted)
        );
        assert_eq!(
            simulate_sign_in(&credentials("lockedXXXXXXXXXXXXXX")),
            Ok(SignInOutcome::Locked)
        );
        assert_eq!(
            simulate_sign_in(&credentials("OFFLINEXXXXXXXXXXXXX")),
            Ok(SignInOutcome::Unavailable)
        );
        assert_eq!(
            simulate_sign_in(&credentials("REJECTXXXXXXXXXXXXXX")),
            Ok(SignInOutcome::Rejected)
        );
        assert!(simulate_sign_in(&credentials("CRASHXXXXXXXXXXXXXXX")).is_err());
    }
}
