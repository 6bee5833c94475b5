// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use kiosk_status::domain::sizing::QrSize;
    use kiosk_status::ui::design_tokens::{opacity, palette, spacing, typography};
    use kiosk_status::ui::layout;
    use kiosk_status::ui::styles::container;
    use kiosk_status::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all container styles compile and are callable
        let _ = container::panel(&theme);
        let _ = container::code_plate(palette::WHITE)(&theme);
        let _ = container::screen(palette::GRAY_900)(&theme);
    }

    #[test]
    fn panel_is_translucent() {
        let style = container::panel(&Theme::Light);
        match style.background {
            Some(iced::Background::Color(color)) => assert_eq!(color.a, opacity::SURFACE),
            other => panic!("unexpected panel background: {other:?}"),
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::ERROR_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_MEDIUM;
        let _ = typography::TITLE_MD;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeMode::Light.colors();
        let dark = ThemeMode::Dark.colors();

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn code_plate_stays_white_for_scanners() {
        assert_eq!(ColorScheme::light().code_plate, palette::WHITE);
        assert_eq!(ColorScheme::dark().code_plate, palette::WHITE);
    }

    #[test]
    fn minimum_window_fits_the_code() {
        let bounds = layout::content_bounds(iced::Size::new(
            kiosk_status::config::MIN_WINDOW_WIDTH,
            kiosk_status::config::MIN_WINDOW_HEIGHT,
        ));
        let size = QrSize::from_container(bounds).expect("measured");
        assert!(size.as_f32() <= bounds.height());
    }
}
