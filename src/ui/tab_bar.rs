// SPDX-License-Identifier: MPL-2.0
//! Tab bar for switching between the challenge playground and the
//! reference gallery. The active tab is owned by the application shell;
//! this module only renders the bar and reports selections upward.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the reference tab is the active one.
    pub reference_active: bool,
}

/// Messages emitted by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectChallenge,
    SelectReference,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SelectChallenge,
    SelectReference,
}

/// Process a tab bar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::SelectChallenge => Event::SelectChallenge,
        Message::SelectReference => Event::SelectReference,
    }
}

/// Render the tab bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let challenge = build_tab(
        ctx.i18n.tr("tab-challenge"),
        !ctx.reference_active,
        Message::SelectChallenge,
    );
    let reference = build_tab(
        ctx.i18n.tr("tab-reference"),
        ctx.reference_active,
        Message::SelectReference,
    );

    let row = Row::new().spacing(spacing::LG).push(challenge).push(reference);

    // Full-width chrome surface with a width-capped, centered inner row
    let inner = Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([0.0, spacing::LG]);

    Container::new(inner)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .style(styles::container::surface)
        .into()
}

/// Build a single tab: label button over a selection indicator bar.
fn build_tab<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    let label_button = button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::SM, 0.0])
        .style(move |theme: &Theme, status| tab_button_style(theme, status, selected));

    let indicator = Container::new(iced::widget::Space::new().width(Length::Fill).height(0.0))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TAB_INDICATOR))
        .style(move |_theme: &Theme| indicator_style(selected));

    Column::new().push(label_button).push(indicator).into()
}

/// Style for a tab label: primary when selected, secondary otherwise.
fn tab_button_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let text_color = if selected {
        palette::PRIMARY_600
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => theme.palette().text,
            _ => theme.extended_palette().background.strong.text,
        }
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::TRANSPARENT,
            ..palette::WHITE
        })),
        text_color,
        border: Border::default(),
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}

/// Style for the underline marking the active tab.
fn indicator_style(selected: bool) -> container::Style {
    let color = if selected {
        palette::PRIMARY_600
    } else {
        Color::TRANSPARENT
    };

    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_bar_view_renders_both_states() {
        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            reference_active: false,
        });
        let _ = view(ViewContext {
            i18n: &i18n,
            reference_active: true,
        });
    }

    #[test]
    fn selections_map_to_events() {
        assert!(matches!(
            update(&Message::SelectChallenge),
            Event::SelectChallenge
        ));
        assert!(matches!(
            update(&Message::SelectReference),
            Event::SelectReference
        ));
    }

    #[test]
    fn selected_tab_uses_the_primary_token() {
        let theme = Theme::Light;
        let selected = tab_button_style(&theme, button::Status::Active, true);
        let unselected = tab_button_style(&theme, button::Status::Active, false);

        assert_eq!(selected.text_color, palette::PRIMARY_600);
        assert_ne!(unselected.text_color, palette::PRIMARY_600);
    }

    #[test]
    fn indicator_is_transparent_when_unselected(){
        let selected = indicator_style(true);
        let unselected = indicator_style(false);

        assert_eq!(
            selected.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
        assert_eq!(
            unselected.background,
            Some(Background::Color(Color::TRANSPARENT))
        );
    }
}
