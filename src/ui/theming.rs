// SPDX-License-Identifier: MPL-2.0
//! Selectable theme for the uploader window.
//!
//! One layout, three looks: light, dark, or follow the system.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the form reads beyond what the Iced theme palette provides.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,

    /// Drop zone background behind the "choose image" area.
    pub upload_area: Color,

    pub error: Color,
    pub error_surface: Color,
    pub success: Color,
    pub success_surface: Color,
    pub warning: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::BRAND_500,
            brand_secondary: palette::BRAND_600,

            upload_area: palette::BRAND_50,

            error: palette::ERROR_500,
            error_surface: palette::ERROR_50,
            success: palette::SUCCESS_500,
            success_surface: palette::SUCCESS_50,
            warning: palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::BRAND_400,
            brand_secondary: palette::BRAND_500,

            upload_area: Color::from_rgb(0.08, 0.2, 0.15),

            error: palette::ERROR_500,
            error_surface: Color::from_rgb(0.3, 0.1, 0.1),
            success: palette::SUCCESS_500,
            success_surface: Color::from_rgb(0.07, 0.25, 0.16),
            warning: palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// i18n key of the label shown in the theme picker.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}

/// Color scheme matching an Iced theme as resolved by [`ThemeMode::iced_theme`].
#[must_use]
pub fn scheme_for(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}
