// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::playground::{self, ViewContext as PlaygroundViewContext};
use crate::ui::reference::{self, ViewContext as ReferenceViewContext};
use crate::ui::tab_bar::{self, ViewContext as TabBarViewContext};
use iced::widget::{rule, scrollable, Column, Container};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub playground: &'a playground::State,
    pub spinner_rotation: f32,
}

/// Renders the header, tab bar, and the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view: Element<'_, Message> = header::view(HeaderViewContext { i18n: ctx.i18n });

    let tab_bar_view = tab_bar::view(TabBarViewContext {
        i18n: ctx.i18n,
        reference_active: ctx.screen == Screen::Reference,
    })
    .map(Message::TabBar);

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Challenge => view_playground(ctx.playground, ctx.i18n),
        Screen::Reference => view_reference(ctx.i18n, ctx.spinner_rotation),
    };

    let content = Container::new(screen_view)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::XL, spacing::LG]);

    // Center the width-capped content inside the scroll area
    let centered = Container::new(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let column = Column::new()
        .width(Length::Fill)
        .push(header_view)
        .push(rule::horizontal(1))
        .push(tab_bar_view)
        .push(rule::horizontal(1))
        .push(scrollable(centered).width(Length::Fill).height(Length::Fill));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_playground<'a>(state: &'a playground::State, i18n: &'a I18n) -> Element<'a, Message> {
    playground::view(PlaygroundViewContext { i18n, state }).map(Message::Playground)
}

fn view_reference(i18n: &I18n, spinner_rotation: f32) -> Element<'_, Message> {
    reference::view(ReferenceViewContext {
        i18n,
        spinner_rotation,
    })
    .map(Message::Reference)
}
