// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and semantic color scales
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use tokenlab::ui::design_tokens::{palette, spacing};

// Style a success surface
let surface = palette::SUCCESS_50;
let accent = palette::SUCCESS_500;

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);
    pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.98);

    // Brand colors (indigo scale)
    pub const PRIMARY_50: Color = Color::from_rgb(0.94, 0.96, 1.0);
    pub const PRIMARY_100: Color = Color::from_rgb(0.88, 0.91, 1.0);
    pub const PRIMARY_200: Color = Color::from_rgb(0.78, 0.84, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.27, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.26, 0.22, 0.79);
    pub const PRIMARY_800: Color = Color::from_rgb(0.21, 0.19, 0.64);
    pub const PRIMARY_900: Color = Color::from_rgb(0.19, 0.18, 0.51);

    // Semantic scales: info (blue)
    pub const INFO_50: Color = Color::from_rgb(0.94, 0.97, 1.0);
    pub const INFO_200: Color = Color::from_rgb(0.75, 0.86, 1.0);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const INFO_600: Color = Color::from_rgb(0.15, 0.39, 0.92);
    pub const INFO_700: Color = Color::from_rgb(0.11, 0.31, 0.85);
    pub const INFO_800: Color = Color::from_rgb(0.12, 0.25, 0.69);

    // Semantic scales: success (green)
    pub const SUCCESS_50: Color = Color::from_rgb(0.94, 0.99, 0.96);
    pub const SUCCESS_200: Color = Color::from_rgb(0.73, 0.93, 0.82);
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const SUCCESS_600: Color = Color::from_rgb(0.09, 0.64, 0.29);
    pub const SUCCESS_700: Color = Color::from_rgb(0.08, 0.5, 0.24);
    pub const SUCCESS_800: Color = Color::from_rgb(0.09, 0.4, 0.2);

    // Semantic scales: warning (amber)
    pub const WARNING_50: Color = Color::from_rgb(1.0, 0.98, 0.92);
    pub const WARNING_200: Color = Color::from_rgb(0.99, 0.9, 0.54);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
    pub const WARNING_600: Color = Color::from_rgb(0.85, 0.47, 0.02);
    pub const WARNING_700: Color = Color::from_rgb(0.71, 0.32, 0.04);
    pub const WARNING_800: Color = Color::from_rgb(0.57, 0.25, 0.05);

    // Semantic scales: error (red)
    pub const ERROR_50: Color = Color::from_rgb(1.0, 0.95, 0.95);
    pub const ERROR_200: Color = Color::from_rgb(1.0, 0.79, 0.79);
    pub const ERROR_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const ERROR_600: Color = Color::from_rgb(0.86, 0.15, 0.15);
    pub const ERROR_700: Color = Color::from_rgb(0.73, 0.11, 0.11);
    pub const ERROR_800: Color = Color::from_rgb(0.6, 0.11, 0.11);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const DISABLED: f32 = 0.5;
    pub const HOVER_TINT: f32 = 0.08;
    pub const PRESSED_TINT: f32 = 0.16;
    pub const SPINNER_TRACK: f32 = 0.25;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
    pub const XL: f32 = 32.0; // 8 units
    pub const XXL: f32 = 48.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    // Spinner drawn inside loading buttons
    pub const SPINNER: f32 = 16.0;

    // Token gallery swatches
    pub const SWATCH: f32 = 32.0;

    // Content column
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;

    // Tab underline thickness
    pub const TAB_INDICATOR: f32 = 2.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for consistent text hierarchy.
    //!
    //! - Titles: Page and section headings
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large title - Application header.
    pub const TITLE_LG: f32 = 24.0;

    /// Medium title - Section headings (playground sections).
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Group headings, alert titles.
    pub const TITLE_SM: f32 = 16.0;

    /// Large body - Large button labels.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, alert bodies.
    pub const BODY: f32 = 14.0;

    /// Small body - Small button labels, descriptions.
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Token names, swatch labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Card outlines, alert surfaces.
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Tab indicator, emphasis borders.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const XL: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DISABLED > 0.0 && opacity::DISABLED < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
