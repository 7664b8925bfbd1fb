// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles shared across screens.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Chrome surface for the header and tab bar.
pub fn surface(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Raised card used by the reference gallery groups.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Brand-tinted card for the challenge instructions.
pub fn instructions(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_50)),
        border: Border {
            color: palette::PRIMARY_200,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        text_color: Some(palette::PRIMARY_800),
        ..Default::default()
    }
}

/// Fixed-color swatch tile for the token gallery.
pub fn swatch(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_card_uses_brand_tokens() {
        let theme = Theme::Light;
        let style = instructions(&theme);

        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_50))
        );
        assert_eq!(style.border.color, palette::PRIMARY_200);
    }

    #[test]
    fn swatch_keeps_the_requested_color() {
        let theme = Theme::Light;
        let style = swatch(palette::SUCCESS_500)(&theme);

        assert_eq!(
            style.background,
            Some(Background::Color(palette::SUCCESS_500))
        );
    }

    #[test]
    fn card_adapts_to_theme() {
        let light = card(&Theme::Light);
        let dark = card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
