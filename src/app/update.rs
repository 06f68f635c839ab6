// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their owners; the `Event` each
//! component returns is what crosses back into application-level concerns
//! (screen switching, config persistence, toast notifications).

use super::{persistence, App, Message, Screen};
use crate::ui::notifications::Notification;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::wheel::Event as WheelEvent;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Wheel(msg) => {
            match app.wheel.update(msg) {
                WheelEvent::None => {}
                WheelEvent::SpinFinished { winner } => {
                    // A winner is absent only if every segment was removed
                    // mid-spin; there is nothing to announce then.
                    if let Some(segment) = winner {
                        app.notifications.push(
                            Notification::success("notification-winner")
                                .with_arg("name", segment.name),
                        );
                    }
                }
            }
            Task::none()
        }
        Message::Settings(msg) => {
            match settings::update(&mut app.settings, msg) {
                SettingsEvent::None => {}
                SettingsEvent::Back => {
                    app.screen = Screen::Wheel;
                }
                SettingsEvent::LanguageChanged(locale) => {
                    app.i18n.set_locale(locale);
                    persistence::persist_config(app);
                }
                SettingsEvent::ThemeModeChanged(mode) => {
                    app.theme_mode = mode;
                    persistence::persist_config(app);
                }
            }
            Task::none()
        }
        Message::SwitchScreen(screen) => {
            app.screen = screen;
            Task::none()
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::wheel;

    #[test]
    fn switch_screen_changes_active_screen() {
        let mut app = App::default();
        let _ = update(&mut app, Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn settings_back_returns_to_wheel() {
        let mut app = App::default();
        app.screen = Screen::Settings;
        let _ = update(
            &mut app,
            Message::Settings(settings::Message::BackToWheel),
        );
        assert_eq!(app.screen, Screen::Wheel);
    }

    #[test]
    fn wheel_messages_reach_the_wheel() {
        let mut app = App::default();
        let _ = update(&mut app, Message::Wheel(wheel::Message::AddPressed));
        assert_eq!(app.wheel.segment_count(), 4);
    }
}
