// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::scheme_for;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Submit button. Disabled renders the brand color at half opacity so the
/// three states (enabled, disabled, busy) stay recognizable.
pub fn submit(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme_for(theme);

    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (colors.brand_primary, shadow::SM),
        button::Status::Hovered => (colors.brand_secondary, shadow::SM),
        button::Status::Disabled => (
            Color {
                a: opacity::DISABLED,
                ..colors.brand_primary
            },
            shadow::NONE,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_secondary,
            width: 0.0,
            radius: radius::LG.into(),
        },
        shadow,
        snap: true,
    }
}

/// Flat button drawn over the upload area; the container provides the look.
pub fn upload_area(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme_for(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        _ => colors.brand_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Small text-only button, used to dismiss notices.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme_for(theme);
    let text_color = match status {
        button::Status::Hovered => colors.text_primary,
        _ => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
