// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG glyphs.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so repeated renders reuse the parsed asset. The
//! glyphs are stroke-based outlines drawn in black; callers recolor them
//! through [`tinted`] so one asset serves every severity and theme.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//! use crate::ui::design_tokens::{palette, sizing};
//!
//! let accent = icons::tinted(icons::info(), palette::INFO_500);
//! let small = icons::sized(icons::cross(), sizing::ICON_SM);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_alert`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Severity Icons
// =============================================================================

define_icon!(info, "info.svg", "Info icon: circle with a lowercase i.");
define_icon!(
    check_circle,
    "check_circle.svg",
    "Check circle icon: circle with a checkmark."
);
define_icon!(
    exclamation,
    "exclamation.svg",
    "Exclamation icon: triangle with an exclamation mark."
);
define_icon!(
    x_circle,
    "x_circle.svg",
    "X circle icon: circle with an X mark."
);

// =============================================================================
// Action & Decoration Icons
// =============================================================================

define_icon!(cross, "cross.svg", "Cross icon: plain X mark.");
define_icon!(star, "star.svg", "Star icon: five-pointed outline star.");
define_icon!(clock, "clock.svg", "Clock icon: circle with hour hands.");

// =============================================================================
// Helpers
// =============================================================================

/// Resizes an icon to a square of the given token size.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon with a fixed color, overriding the asset's stroke.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}
