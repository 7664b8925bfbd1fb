// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use tokenlab::ui::components::alert::AlertVariant;
    use tokenlab::ui::design_tokens::{opacity, palette, sizing, spacing};
    use tokenlab::ui::theming::ThemeMode;

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::DISABLED;

        // Sizing
        let _ = sizing::ICON_LG;
    }

    #[test]
    fn alert_variants_pull_from_their_own_scales() {
        assert_eq!(AlertVariant::Info.accent(), palette::INFO_500);
        assert_eq!(AlertVariant::Success.accent(), palette::SUCCESS_500);
        assert_eq!(AlertVariant::Warning.accent(), palette::WARNING_500);
        assert_eq!(AlertVariant::Error.accent(), palette::ERROR_500);

        assert_eq!(AlertVariant::Info.surface(), palette::INFO_50);
        assert_eq!(AlertVariant::Success.surface(), palette::SUCCESS_50);
        assert_eq!(AlertVariant::Warning.surface(), palette::WARNING_50);
        assert_eq!(AlertVariant::Error.surface(), palette::ERROR_50);
    }

    #[test]
    fn no_variant_borrows_another_variants_treatment() {
        for (i, a) in AlertVariant::ALL.iter().enumerate() {
            for b in AlertVariant::ALL.iter().skip(i + 1) {
                assert_ne!(a.accent(), b.accent());
                assert_ne!(a.surface(), b.surface());
                assert_ne!(a.outline(), b.outline());
                assert_ne!(a.title_color(), b.title_color());
                assert_ne!(a.body_color(), b.body_color());
            }
        }
    }

    #[test]
    fn theming_maps_fixed_modes_correctly() {
        assert_eq!(ThemeMode::Light.to_iced_theme(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), iced::Theme::Dark);
    }
}
