// SPDX-License-Identifier: MPL-2.0
//! Alert component — the artifact of the challenge.
//!
//! An alert is a single notification block reflecting a semantic severity:
//! - A severity icon and variant-colored surface
//! - An optional title rendered as a heading above the body
//! - A required body supplied as opaque content
//! - An optional dismiss control whose activation emits the caller's message
//! - An optional actions slot rendered below the body
//!
//! The component holds no state and performs no hiding itself: visibility is
//! entirely owned by the caller, which decides whether to mount the alert at
//! all (see the playground's dismiss/restore flow).
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::alert::{Alert, AlertVariant};
//!
//! Alert::text("Your payment of $99.00 has been processed.")
//!     .variant(AlertVariant::Success)
//!     .title("Payment successful")
//!     .dismissible(true)
//!     .on_dismiss(Message::DismissReceipt)
//!     .view()
//! ```

use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Semantic severity of an alert. A closed set: there is no extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    /// Neutral information (blue).
    #[default]
    Info,
    /// A successful operation (green).
    Success,
    /// A potential issue that doesn't block the user (amber).
    Warning,
    /// A failed operation (red).
    Error,
}

impl AlertVariant {
    /// All variants in display order.
    pub const ALL: [AlertVariant; 4] = [
        AlertVariant::Info,
        AlertVariant::Success,
        AlertVariant::Warning,
        AlertVariant::Error,
    ];

    /// The token-scale name of this variant (`info`, `success`, ...).
    #[must_use]
    pub fn token_name(self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Warning => "warning",
            AlertVariant::Error => "error",
        }
    }

    /// Accent color (500 step) used for the icon and dismiss control.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            AlertVariant::Info => palette::INFO_500,
            AlertVariant::Success => palette::SUCCESS_500,
            AlertVariant::Warning => palette::WARNING_500,
            AlertVariant::Error => palette::ERROR_500,
        }
    }

    /// Surface color (50 step) used for the alert background.
    #[must_use]
    pub fn surface(self) -> Color {
        match self {
            AlertVariant::Info => palette::INFO_50,
            AlertVariant::Success => palette::SUCCESS_50,
            AlertVariant::Warning => palette::WARNING_50,
            AlertVariant::Error => palette::ERROR_50,
        }
    }

    /// Outline color (200 step) used for the alert border.
    #[must_use]
    pub fn outline(self) -> Color {
        match self {
            AlertVariant::Info => palette::INFO_200,
            AlertVariant::Success => palette::SUCCESS_200,
            AlertVariant::Warning => palette::WARNING_200,
            AlertVariant::Error => palette::ERROR_200,
        }
    }

    /// Heading color (800 step) used for the title.
    #[must_use]
    pub fn title_color(self) -> Color {
        match self {
            AlertVariant::Info => palette::INFO_800,
            AlertVariant::Success => palette::SUCCESS_800,
            AlertVariant::Warning => palette::WARNING_800,
            AlertVariant::Error => palette::ERROR_800,
        }
    }

    /// Body text color (700 step).
    #[must_use]
    pub fn body_color(self) -> Color {
        match self {
            AlertVariant::Info => palette::INFO_700,
            AlertVariant::Success => palette::SUCCESS_700,
            AlertVariant::Warning => palette::WARNING_700,
            AlertVariant::Error => palette::ERROR_700,
        }
    }

    /// Returns the severity glyph for this variant.
    fn icon<'b>(self) -> Svg<'b> {
        match self {
            AlertVariant::Info => icons::info(),
            AlertVariant::Success => icons::check_circle(),
            AlertVariant::Warning => icons::exclamation(),
            AlertVariant::Error => icons::x_circle(),
        }
    }
}

/// Builder for a single alert block.
pub struct Alert<'a, Message> {
    variant: AlertVariant,
    title: Option<String>,
    body: Element<'a, Message>,
    dismissible: bool,
    on_dismiss: Option<Message>,
    actions: Option<Element<'a, Message>>,
    width: Length,
}

impl<'a, Message: Clone + 'a> Alert<'a, Message> {
    /// Creates an alert with the given body content. The body is required;
    /// everything else defaults off.
    pub fn new(body: impl Into<Element<'a, Message>>) -> Self {
        Self {
            variant: AlertVariant::default(),
            title: None,
            body: body.into(),
            dismissible: false,
            on_dismiss: None,
            actions: None,
            width: Length::Fill,
        }
    }

    /// Convenience constructor for a plain-text body.
    pub fn text(body: impl text::IntoFragment<'a>) -> Self {
        Self::new(Text::new(body).size(typography::BODY))
    }

    /// Sets the semantic severity.
    #[must_use]
    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the optional title rendered as a heading above the body.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Gates the dismiss control. The control renders whenever this is true,
    /// independent of whether a dismiss message was supplied.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Sets the message emitted when the dismiss control is activated.
    #[must_use]
    pub fn on_dismiss(mut self, message: Message) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Sets the actions slot rendered below the body.
    #[must_use]
    pub fn actions(mut self, actions: impl Into<Element<'a, Message>>) -> Self {
        self.actions = Some(actions.into());
        self
    }

    /// Overrides the alert width (fills its container by default).
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Renders the alert.
    pub fn view(self) -> Element<'a, Message> {
        let variant = self.variant;
        let accent = variant.accent();

        // Severity icon
        let icon: Svg<'a> = icons::sized(icons::tinted(variant.icon(), accent), sizing::ICON_MD);

        // Content column: [title?] [body] [actions?]
        let mut content = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::BODY)
                .font(iced::Font {
                    weight: iced::font::Weight::Semibold,
                    ..iced::Font::default()
                })
                .style(move |_theme: &Theme| text::Style {
                    color: Some(variant.title_color()),
                });
            content = content.push(title);
        }

        content = content.push(self.body);

        if let Some(actions) = self.actions {
            content = content.push(Container::new(actions).padding([spacing::XS, 0.0]));
        }

        // Layout: [icon] [content] [dismiss?]
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(icon).padding([spacing::XXS / 2.0, 0.0]))
            .push(content);

        if self.dismissible {
            // on_press_maybe keeps the control present even without a
            // message; activation emits the caller's message exactly once.
            let dismiss = button(icons::sized(
                icons::tinted(icons::cross(), accent),
                sizing::ICON_SM,
            ))
            .on_press_maybe(self.on_dismiss)
            .padding(spacing::XXS)
            .style(dismiss_button_style);
            row = row.push(dismiss);
        }

        Container::new(row)
            .width(self.width)
            .padding(spacing::MD)
            .style(move |_theme: &Theme| alert_container_style(variant))
            .into()
    }
}

/// Style for the alert surface, keyed on the variant's token scale.
fn alert_container_style(variant: AlertVariant) -> container::Style {
    container::Style {
        background: Some(Background::Color(variant.surface())),
        border: Border {
            color: variant.outline(),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(variant.body_color()),
        ..Default::default()
    }
}

/// Style for the dismiss control: transparent at rest, tinted on hover.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let tint = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        }))
    };

    let background = match status {
        button::Status::Hovered => tint(opacity::HOVER_TINT),
        button::Status::Pressed => tint(opacity::PRESSED_TINT),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::GRAY_700,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Dismissed,
        Retry,
    }

    #[test]
    fn default_variant_is_info() {
        let alert: Alert<'_, TestMessage> = Alert::text("body");
        assert_eq!(alert.variant, AlertVariant::Info);
        assert!(!alert.dismissible);
        assert!(alert.title.is_none());
        assert!(alert.on_dismiss.is_none());
    }

    #[test]
    fn builder_records_title_and_dismiss_state() {
        let alert: Alert<'_, TestMessage> = Alert::text("body")
            .variant(AlertVariant::Warning)
            .title("Storage almost full")
            .dismissible(true)
            .on_dismiss(TestMessage::Dismissed);

        assert_eq!(alert.variant, AlertVariant::Warning);
        assert_eq!(alert.title.as_deref(), Some("Storage almost full"));
        assert!(alert.dismissible);
        assert_eq!(alert.on_dismiss, Some(TestMessage::Dismissed));
    }

    #[test]
    fn dismissible_is_independent_of_callback() {
        // The control renders whenever dismissible is set, even without a
        // message; and a message without dismissible renders no control.
        let with_control: Alert<'_, TestMessage> = Alert::text("body").dismissible(true);
        assert!(with_control.dismissible);
        assert!(with_control.on_dismiss.is_none());

        let without_control: Alert<'_, TestMessage> =
            Alert::text("body").on_dismiss(TestMessage::Dismissed);
        assert!(!without_control.dismissible);
    }

    #[test]
    fn variant_treatments_are_pairwise_distinct() {
        for (i, a) in AlertVariant::ALL.iter().enumerate() {
            for b in AlertVariant::ALL.iter().skip(i + 1) {
                assert_ne!(a.accent(), b.accent());
                assert_ne!(a.surface(), b.surface());
                assert_ne!(a.title_color(), b.title_color());
            }
        }
    }

    #[test]
    fn variant_surface_style_uses_its_own_scale() {
        let style = alert_container_style(AlertVariant::Success);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::SUCCESS_50))
        );
        assert_eq!(style.border.color, palette::SUCCESS_200);
        assert_eq!(style.text_color, Some(palette::SUCCESS_700));
    }

    #[test]
    fn token_names_match_the_stylesheet_scales() {
        assert_eq!(AlertVariant::Info.token_name(), "info");
        assert_eq!(AlertVariant::Success.token_name(), "success");
        assert_eq!(AlertVariant::Warning.token_name(), "warning");
        assert_eq!(AlertVariant::Error.token_name(), "error");
    }

    #[test]
    fn view_renders_all_shapes() {
        // Bare body
        let _: Element<'_, TestMessage> = Alert::text("body").view();

        // Title + variant
        let _: Element<'_, TestMessage> = Alert::text("body")
            .variant(AlertVariant::Error)
            .title("Failed to save")
            .view();

        // Dismissible without callback (control present, inert)
        let _: Element<'_, TestMessage> = Alert::text("body").dismissible(true).view();

        // Dismissible with callback
        let _: Element<'_, TestMessage> = Alert::text("body")
            .dismissible(true)
            .on_dismiss(TestMessage::Dismissed)
            .view();

        // Actions slot
        let actions = iced::widget::button(Text::new("Retry")).on_press(TestMessage::Retry);
        let _: Element<'_, TestMessage> = Alert::text("body").actions(actions).view();
    }
}
