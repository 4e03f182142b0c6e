// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::scheme_for;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Form card holding every input.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dashed-look drop area behind the "choose image" button.
pub fn upload_area(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);

    container::Style {
        background: Some(Background::Color(colors.upload_area)),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_LG,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Frame around the image preview.
pub fn preview_frame(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);

    container::Style {
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_LG,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

fn alert(background: Color, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

pub fn alert_success(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    alert(colors.success_surface, colors.success)
}

pub fn alert_error(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    alert(colors.error_surface, colors.error)
}

/// Non-blocking notice (e.g. unreadable settings file).
pub fn notice(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.warning,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
