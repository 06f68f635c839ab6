// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and theme mode.
//!
//! Changes are reported to the parent through [`Event`]s; the parent owns
//! applying them (locale switch, theme switch) and persisting the config.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, text, Column, Row, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

/// Initial values the settings screen is seeded with.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateConfig {
    pub theme_mode: ThemeMode,
}

/// Settings screen state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    theme_mode: ThemeMode,
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self {
            theme_mode: config.theme_mode,
        }
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Render the settings screen.
    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back_button = button(
            text(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
        )
        .on_press(Message::BackToWheel)
        .style(styles::button::secondary)
        .padding(spacing::XS);

        let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

        let language_section = self.language_section(ctx.i18n);
        let theme_section = self.theme_section(ctx.i18n);

        let content = Column::new()
            .push(back_button)
            .push(title)
            .push(language_section)
            .push(theme_section)
            .spacing(spacing::LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        container(content)
            .style(styles::container::panel)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn language_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .push(Text::new(i18n.tr("select-language-label")).size(typography::TITLE_SM))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        for locale in &i18n.available_locales {
            let display_name = locale.to_string();

            // Prefer the translated language name, e.g. "language-name-fr"
            let translated_name_key = format!("language-name-{}", locale);
            let translated_name = i18n.tr(&translated_name_key);
            let button_text = if translated_name.starts_with("MISSING:") {
                display_name
            } else {
                format!("{} ({})", translated_name, display_name)
            };

            let is_current = i18n.current_locale() == locale;
            let label = text(button_text).size(typography::BODY);
            let mut language_button =
                button(label).on_press(Message::LanguageSelected(locale.clone()));
            language_button = if is_current {
                language_button.style(styles::button::primary)
            } else {
                language_button.style(button::secondary)
            };

            column = column.push(language_button);
        }

        column.into()
    }

    fn theme_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        for mode in ThemeMode::ALL {
            let label = text(i18n.tr(mode.i18n_key())).size(typography::BODY);
            let mut mode_button = button(label).on_press(Message::ThemeModeSelected(mode));
            mode_button = if mode == self.theme_mode {
                mode_button.style(styles::button::primary)
            } else {
                mode_button.style(button::secondary)
            };
            row = row.push(mode_button);
        }

        Column::new()
            .push(Text::new(i18n.tr("settings-theme-label")).size(typography::TITLE_SM))
            .push(row)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToWheel,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Back,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
}

/// Process a settings message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::BackToWheel => Event::Back,
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeModeSelected(mode) => {
            state.theme_mode = mode;
            Event::ThemeModeChanged(mode)
        }
    }
}
