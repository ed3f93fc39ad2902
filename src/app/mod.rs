// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the sign-in form to the notification dispatcher,
//! loads preferences and persisted state at startup, and translates
//! dispatcher effects (focus, retry, contact) into tasks.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, SignInOutcome};
pub use update::{simulate_sign_in, MAX_ATTEMPTS, SIGN_IN_ACTION};

use crate::diagnostics::{self, DiagnosticsHandle, FanoutSink, LogSink, MemorySink, StderrSink};
use crate::ui::notifications::{Dispatcher, PersistedSlot, SystemClock};
use crate::ui::sign_in;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    theme_mode: ThemeMode,
    sign_in: sign_in::State,
    notifications: Dispatcher,
    diagnostics: DiagnosticsHandle,
    /// Recent log records, copied out for support requests.
    log: Arc<MemorySink>,
    failed_attempts: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications)
            .field("failed_attempts", &self.failed_attempts)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let (slot, state_warning) = PersistedSlot::load(None);

        let log = Arc::new(MemorySink::new(config.notifications.log_buffer_capacity()));
        let sink: Arc<dyn LogSink> = Arc::new(FanoutSink::new(vec![
            Arc::new(StderrSink::new()) as Arc<dyn LogSink>,
            log.clone() as Arc<dyn LogSink>,
        ]));

        let (mut notifications, handle) = Dispatcher::init(
            config.notifications.timings(),
            sink,
            Box::new(slot),
            Box::new(SystemClock),
        );
        diagnostics::install_panic_hook(handle.clone());

        notifications.register_inline_target(sign_in::EMAIL);
        for warning in [config_warning, state_warning].into_iter().flatten() {
            notifications.show_warning(warning);
        }

        let mut app = Self {
            theme_mode: config.general.theme_mode,
            sign_in: sign_in::State::new(),
            notifications,
            diagnostics: handle,
            log,
            failed_attempts: 0,
        };

        if let Some(key) = flags.preview.as_deref() {
            app.preview(key);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Scanora".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SignIn(message) => self.handle_sign_in(message),
            Message::Notification(message) => {
                let effects = self.notifications.handle_message(&message);
                self.apply_effects(effects)
            }
            Message::SignInFinished(result) => self.handle_sign_in_finished(result),
            Message::Tick(_) => {
                let effects = self.notifications.tick();
                self.apply_effects(effects)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            sign_in: &self.sign_in,
            notifications: &self.notifications,
        })
    }
}
