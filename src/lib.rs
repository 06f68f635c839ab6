// SPDX-License-Identifier: MPL-2.0
//! `iced_wheel` is a spinning-wheel name picker built with the Iced GUI
//! framework.
//!
//! Users edit the wheel's segments (labels and colors), then trigger a
//! randomized spin; the segment resting under the stationary pointer when
//! the wheel stops is the winner. The crate also demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;

pub use app::config;
