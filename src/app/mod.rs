// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the wheel and settings
//! views.
//!
//! The `App` struct wires together the domains (wheel, localization,
//! settings) and translates messages into side effects like config
//! persistence. This module intentionally keeps policy decisions (window
//! sizing, persistence format, localization switching) close to the main
//! update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::settings::{State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::theming::ThemeMode;
use crate::ui::wheel;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    wheel: wheel::State,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("segment_count", &self.wheel.segment_count())
            .field("is_spinning", &self.wheel.is_spinning())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Wheel,
            wheel: wheel::State::new(config::default_spin_duration()),
            settings: SettingsState::default(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the persisted
    /// configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.wheel = wheel::State::new(config.wheel.spin_duration());
        app.settings = SettingsState::new(SettingsConfig {
            theme_mode: config.general.theme_mode,
        });

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_wheel_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Wheel);
        assert_eq!(app.wheel.segment_count(), 3);
        assert!(!app.wheel.is_spinning());
    }

    #[test]
    fn debug_output_reports_state() {
        let app = App::default();
        let debug = format!("{:?}", app);
        assert!(debug.contains("segment_count"));
    }
}
