// SPDX-License-Identifier: MPL-2.0
//! Application header with the challenge title and time budget hint.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the header. The header emits no messages; it is generic over the
/// host's message type.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_LG).font(
        iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::default()
        },
    );

    let subtitle = Text::new(ctx.i18n.tr("header-subtitle"))
        .size(typography::BODY_SM)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let heading = Column::new().spacing(spacing::XXS).push(title).push(subtitle);

    let time_budget = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::clock(), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr("header-time-budget")).size(typography::BODY_SM));

    let row = Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(heading).width(Length::Fill))
        .push(time_budget);

    // Full-width chrome surface with a width-capped, centered inner row
    let inner = Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::MD, spacing::LG]);

    Container::new(inner)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::surface)
        .into()
}
