// SPDX-License-Identifier: MPL-2.0
//! Reference gallery screen.
//!
//! A stateless catalogue of the Button component (variants, sizes, icon
//! slots, states, layout) followed by the design-token reference: semantic
//! color swatches and the spacing scale. Everything on this screen is
//! rendered from literal arguments; the only moving part is the spinner
//! rotation supplied by the shell's tick state.

use crate::i18n::fluent::I18n;
use crate::ui::components::{AlertVariant, Button, ButtonSize, ButtonVariant};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the reference screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Rotation of the loading-state spinner, advanced by the shell's tick.
    pub spinner_rotation: f32,
}

/// Messages emitted by the reference screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery button was pressed. Gallery buttons carry a message so
    /// they render in their enabled state; the shell ignores it.
    DemoPressed,
}

/// Render the reference screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(build_button_section(&ctx))
        .push(build_tokens_section(&ctx))
        .into()
}

/// Build the Button component section.
fn build_button_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let variants = Row::new()
        .spacing(spacing::SM)
        .push(demo_button(i18n.tr("reference-button-primary"), ButtonVariant::Primary))
        .push(demo_button(
            i18n.tr("reference-button-secondary"),
            ButtonVariant::Secondary,
        ))
        .push(demo_button(i18n.tr("reference-button-ghost"), ButtonVariant::Ghost))
        .push(demo_button(
            i18n.tr("reference-button-destructive"),
            ButtonVariant::Destructive,
        ));

    let sizes = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Button::new(i18n.tr("reference-button-small"))
                .size(ButtonSize::Small)
                .on_press(Message::DemoPressed)
                .view(),
        )
        .push(
            Button::new(i18n.tr("reference-button-medium"))
                .on_press(Message::DemoPressed)
                .view(),
        )
        .push(
            Button::new(i18n.tr("reference-button-large"))
                .size(ButtonSize::Large)
                .on_press(Message::DemoPressed)
                .view(),
        );

    let icons_row = Row::new()
        .spacing(spacing::SM)
        .push(
            Button::new(i18n.tr("reference-button-left-icon"))
                .left_icon(icons::sized(icons::star(), sizing::ICON_SM))
                .on_press(Message::DemoPressed)
                .view(),
        )
        .push(
            Button::new(i18n.tr("reference-button-right-icon"))
                .right_icon(icons::sized(icons::star(), sizing::ICON_SM))
                .on_press(Message::DemoPressed)
                .view(),
        );

    let states = Row::new()
        .spacing(spacing::SM)
        .push(
            Button::new(i18n.tr("reference-button-disabled"))
                .disabled(true)
                .on_press(Message::DemoPressed)
                .view(),
        )
        .push(
            Button::new(i18n.tr("reference-button-loading"))
                .loading(true, ctx.spinner_rotation)
                .on_press(Message::DemoPressed)
                .view(),
        );

    let layout = Button::new(i18n.tr("reference-button-full-width"))
        .variant(ButtonVariant::Secondary)
        .full_width(true)
        .on_press(Message::DemoPressed)
        .view();

    let card = Column::new()
        .spacing(spacing::MD)
        .push(group_heading(i18n.tr("reference-group-variants")))
        .push(variants)
        .push(group_heading(i18n.tr("reference-group-sizes")))
        .push(sizes)
        .push(group_heading(i18n.tr("reference-group-icons")))
        .push(icons_row)
        .push(group_heading(i18n.tr("reference-group-states")))
        .push(states)
        .push(group_heading(i18n.tr("reference-group-layout")))
        .push(layout);

    build_section(
        i18n.tr("reference-section-button"),
        i18n.tr("reference-button-description"),
        Container::new(card)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into(),
    )
}

/// Build the design-token reference section.
fn build_tokens_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    // Semantic color swatches: 50 / 500 / 700 per variant scale
    let mut colors = Row::new().spacing(spacing::LG);
    for variant in AlertVariant::ALL {
        let swatches = Row::new()
            .spacing(spacing::XXS)
            .push(swatch(variant.surface()))
            .push(swatch(variant.accent()))
            .push(swatch(variant.body_color()));

        let column = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(variant.token_name())
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
            )
            .push(swatches);

        colors = colors.push(column);
    }

    // Spacing scale: one square per token, labeled by name
    let mut scale = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Bottom);
    for (name, value) in [
        ("XXS", spacing::XXS),
        ("XS", spacing::XS),
        ("SM", spacing::SM),
        ("MD", spacing::MD),
        ("LG", spacing::LG),
        ("XL", spacing::XL),
    ] {
        let bar = Container::new(
            iced::widget::Space::new()
                .width(Length::Fixed(value))
                .height(Length::Fixed(value)),
        )
        .style(styles::container::swatch(palette::PRIMARY_500));

        let column = Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(bar)
            .push(Text::new(name).size(typography::CAPTION));

        scale = scale.push(column);
    }

    let card = Column::new()
        .spacing(spacing::MD)
        .push(group_heading(i18n.tr("reference-group-colors")))
        .push(colors)
        .push(group_heading(i18n.tr("reference-group-spacing")))
        .push(scale);

    build_section(
        i18n.tr("reference-section-tokens"),
        i18n.tr("reference-tokens-description"),
        Container::new(card)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into(),
    )
}

/// A demo button with the given variant.
fn demo_button<'a>(label: String, variant: ButtonVariant) -> Element<'a, Message> {
    Button::new(label)
        .variant(variant)
        .on_press(Message::DemoPressed)
        .view()
}

/// A fixed-size color swatch tile.
fn swatch<'a>(color: iced::Color) -> Element<'a, Message> {
    Container::new(
        iced::widget::Space::new()
            .width(Length::Fixed(sizing::SWATCH))
            .height(Length::Fixed(sizing::SWATCH)),
    )
    .style(styles::container::swatch(color))
    .into()
}

/// Secondary heading used inside the gallery cards.
fn group_heading<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}

/// Build a top-level section: heading, description, content.
fn build_section<'a>(
    title: String,
    description: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let heading = Text::new(title).size(typography::TITLE_MD).font(iced::Font {
        weight: iced::font::Weight::Semibold,
        ..iced::Font::default()
    });

    let description = Text::new(description)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(description)
        .push(content)
        .into()
}
