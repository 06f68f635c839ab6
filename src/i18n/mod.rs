// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language detection, translation file
//! loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation bundles with an on-disk override for
//!   custom builds
//! - Runtime language switching
//! - `MISSING:` fallback when a key has no translation

pub mod fluent;
