// SPDX-License-Identifier: MPL-2.0
//! Persistence of user preferences to the config file.
//!
//! The config is rebuilt from live application state on every change and
//! written in full; a failed write surfaces as a warning toast instead of
//! interrupting the session.

use super::{config, App};
use crate::ui::notifications::Notification;

/// Saves the current preferences (language, theme, spin duration).
pub fn persist_config(app: &mut App) {
    let config = config::Config {
        general: config::GeneralConfig {
            language: Some(app.i18n.current_locale().to_string()),
            theme_mode: app.theme_mode,
        },
        wheel: config::WheelConfig {
            spin_duration_ms: Some(app.wheel.spin_duration().as_millis() as u64),
        },
    };

    if config::save(&config).is_err() {
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
