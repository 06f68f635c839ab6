// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions are conditional so the event loop stays idle when
//! nothing is animating: the wheel tick only runs during a spin, and the
//! notification tick only runs while toasts are on screen. Dropping the
//! spin subscription on teardown is also what guarantees a spin completion
//! can never fire against destroyed state.

use super::{App, Message};
use crate::ui::wheel;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval for the spin animation (~60 fps).
const ANIMATION_TICK_MS: u64 = 16;

/// Polling interval for notification auto-dismiss.
const NOTIFICATION_TICK_MS: u64 = 250;

pub fn subscription(app: &App) -> Subscription<Message> {
    let animation = if app.wheel.is_spinning() {
        time::every(Duration::from_millis(ANIMATION_TICK_MS))
            .map(|instant| Message::Wheel(wheel::Message::AnimationTick(instant)))
    } else {
        Subscription::none()
    };

    let toasts = if app.notifications.has_notifications() {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([animation, toasts])
}
