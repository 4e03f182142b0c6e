// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at build time
//! - Runtime language switching
//! - `MISSING: <key>` marker when a translation is absent

pub mod fluent;

pub use fluent::I18n;
