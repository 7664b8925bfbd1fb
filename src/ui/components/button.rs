// SPDX-License-Identifier: MPL-2.0
//! Button component — the reference implementation of the variant pattern.
//!
//! Demonstrates the intended component shape for the challenge: closed
//! variant and size enums, optional icon slots, a loading state that swaps
//! the content for a spinner, and a `full_width` layout toggle. The button
//! holds no state; activation forwards the caller's message.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use crate::ui::widgets::Spinner;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Visual style variant. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Primary action (brand background).
    #[default]
    Primary,
    /// Secondary action (outlined surface).
    Secondary,
    /// Low-emphasis action (transparent).
    Ghost,
    /// Destructive action (error background).
    Destructive,
}

/// Button size. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Horizontal padding, vertical padding, and font size for this size.
    fn metrics(self) -> (f32, f32, f32) {
        match self {
            ButtonSize::Small => (spacing::SM, spacing::XXS, typography::BODY_SM),
            ButtonSize::Medium => (spacing::MD, spacing::XS, typography::BODY),
            ButtonSize::Large => (spacing::LG, spacing::SM, typography::BODY_LG),
        }
    }
}

/// Builder for a styled button.
pub struct Button<'a, Message> {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    left_icon: Option<Element<'a, Message>>,
    right_icon: Option<Element<'a, Message>>,
    full_width: bool,
    loading: bool,
    disabled: bool,
    spinner_rotation: f32,
    on_press: Option<Message>,
}

impl<'a, Message: Clone + 'static> Button<'a, Message> {
    /// Creates a button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            left_icon: None,
            right_icon: None,
            full_width: false,
            loading: false,
            disabled: false,
            spinner_rotation: 0.0,
            on_press: None,
        }
    }

    /// Sets the visual variant.
    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the icon slot rendered before the label.
    #[must_use]
    pub fn left_icon(mut self, icon: impl Into<Element<'a, Message>>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    /// Sets the icon slot rendered after the label.
    #[must_use]
    pub fn right_icon(mut self, icon: impl Into<Element<'a, Message>>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    /// Makes the button fill its container's width.
    #[must_use]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Swaps the content for a spinner and forces the disabled state.
    /// The rotation is owned by the caller's tick state.
    #[must_use]
    pub fn loading(mut self, loading: bool, spinner_rotation: f32) -> Self {
        self.loading = loading;
        self.spinner_rotation = spinner_rotation;
        self
    }

    /// Disables the button.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the message emitted on activation.
    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Effective disabled state: explicit disable OR loading.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Renders the button.
    pub fn view(self) -> Element<'a, Message> {
        let variant = self.variant;
        let is_disabled = self.is_disabled();
        let (padding_x, padding_y, font_size) = self.size.metrics();

        // Loading swaps the whole content row for a spinner; icons and the
        // label are suppressed together.
        let content: Element<'a, Message> = if self.loading {
            Spinner::new(variant.content_color(), self.spinner_rotation).into_element()
        } else {
            let mut row = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center);

            if let Some(icon) = self.left_icon {
                row = row.push(icon);
            }
            row = row.push(Text::new(self.label).size(font_size));
            if let Some(icon) = self.right_icon {
                row = row.push(icon);
            }

            row.into()
        };

        // Full-width buttons center their content inside the stretched area.
        let (width, content) = if self.full_width {
            let centered: Element<'a, Message> = Container::new(content)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill)
                .into();
            (Length::Fill, centered)
        } else {
            (Length::Shrink, content)
        };

        button(content)
            .on_press_maybe(if is_disabled { None } else { self.on_press })
            .width(width)
            .padding([padding_y, padding_x])
            .style(move |theme: &Theme, status| variant_style(variant, theme, status, is_disabled))
            .into()
    }
}

impl ButtonVariant {
    /// Color of the label, icons, and spinner on this variant.
    fn content_color(self) -> Color {
        match self {
            ButtonVariant::Primary | ButtonVariant::Destructive => palette::WHITE,
            ButtonVariant::Secondary | ButtonVariant::Ghost => palette::GRAY_900,
        }
    }

    /// Background colors for rest, hover, and pressed states.
    fn backgrounds(self) -> (Color, Color, Color) {
        match self {
            ButtonVariant::Primary => (
                palette::PRIMARY_600,
                palette::PRIMARY_700,
                palette::PRIMARY_800,
            ),
            ButtonVariant::Secondary => (palette::WHITE, palette::GRAY_100, palette::GRAY_200),
            ButtonVariant::Ghost => (
                Color::TRANSPARENT,
                palette::GRAY_100,
                palette::GRAY_200,
            ),
            ButtonVariant::Destructive => (
                palette::ERROR_600,
                palette::ERROR_700,
                palette::ERROR_800,
            ),
        }
    }

    /// Border for this variant; only Secondary is outlined.
    fn outline(self) -> Option<Color> {
        match self {
            ButtonVariant::Secondary => Some(palette::GRAY_200),
            _ => None,
        }
    }
}

/// Style function covering every variant × status pair.
fn variant_style(
    variant: ButtonVariant,
    _theme: &Theme,
    status: button::Status,
    is_disabled: bool,
) -> button::Style {
    let (rest, hovered, pressed) = variant.backgrounds();
    let content = variant.content_color();

    let background = if is_disabled {
        rest
    } else {
        match status {
            button::Status::Hovered => hovered,
            button::Status::Pressed => pressed,
            button::Status::Active | button::Status::Disabled => rest,
        }
    };

    let text_color = if is_disabled {
        Color {
            a: opacity::DISABLED,
            ..content
        }
    } else {
        content
    };

    button::Style {
        background: Some(Background::Color(if is_disabled {
            // Multiply so a transparent Ghost background stays transparent
            Color {
                a: background.a * opacity::DISABLED,
                ..background
            }
        } else {
            background
        })),
        text_color,
        border: Border {
            color: variant.outline().unwrap_or(Color::TRANSPARENT),
            width: if variant.outline().is_some() {
                border::WIDTH_SM
            } else {
                0.0
            },
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
