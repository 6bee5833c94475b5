// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    /// Plate behind the scannable code; always light so scanners see contrast.
    pub code_plate: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            error: palette::ERROR_600,
            success: palette::SUCCESS_600,

            code_plate: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            code_plate: palette::WHITE,
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
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the mode to a concrete light or dark mode.
    #[must_use]
    pub fn resolve(self) -> Self {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.8);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn code_plate_is_light_in_both_schemes() {
        assert_eq!(ColorScheme::light().code_plate, palette::WHITE);
        assert_eq!(ColorScheme::dark().code_plate, palette::WHITE);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn resolve_never_returns_system() {
        assert_eq!(ThemeMode::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.resolve(), ThemeMode::Dark);
        assert_ne!(ThemeMode::System.resolve(), ThemeMode::System);
    }

    #[test]
    fn iced_theme_follows_mode() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}
