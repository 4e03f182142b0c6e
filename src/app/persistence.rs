// SPDX-License-Identifier: MPL-2.0
//! Preference persistence: theme and language survive restarts.
//!
//! Form contents (endpoint, caption, file) are never written to disk.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Writes the current theme and language to `settings.toml`.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the config functions directly with a temporary directory.
pub fn persist_preferences(theme_mode: ThemeMode, locale: &LanguageIdentifier) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _) = config::load();
    apply_preferences(&mut cfg, theme_mode, locale);

    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save config");
    }
}

/// Applies the newly selected locale and persists it.
pub fn apply_language_change(i18n: &mut I18n, theme_mode: ThemeMode, locale: LanguageIdentifier) {
    i18n.set_locale(locale);
    persist_preferences(theme_mode, i18n.current_locale());
}

fn apply_preferences(cfg: &mut config::Config, theme_mode: ThemeMode, locale: &LanguageIdentifier) {
    cfg.general.theme_mode = theme_mode;
    cfg.general.language = Some(locale.to_string());
}
