// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Status panel surface.
///
/// The color is derived from the active Iced `Theme` background with a slight
/// transparency, so the background image shows through in both light and
/// dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// White plate behind the scannable code, whatever the theme.
pub fn code_plate(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window backdrop shown when no background image is configured.
pub fn screen(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}
