// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and layers the toast overlay on top.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::settings::ViewContext as SettingsViewContext;
use crate::ui::styles;
use crate::ui::wheel;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Wheel => view_wheel(app),
        Screen::Settings => app
            .settings
            .view(SettingsViewContext { i18n: &app.i18n })
            .map(Message::Settings),
    };

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(screen)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn view_wheel(app: &App) -> Element<'_, Message> {
    let settings_button = button(text(app.i18n.tr("settings-title")).size(typography::BODY))
        .on_press(Message::SwitchScreen(Screen::Settings))
        .style(styles::button::secondary)
        .padding(spacing::XS);

    let header = Row::new()
        .width(Length::Fill)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(settings_button);

    let wheel_content = app
        .wheel
        .view(wheel::ViewContext { i18n: &app.i18n })
        .map(Message::Wheel);

    Column::new()
        .push(header)
        .push(wheel_content)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
