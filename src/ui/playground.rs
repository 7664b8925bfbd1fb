// SPDX-License-Identifier: MPL-2.0
//! Challenge playground screen.
//!
//! Renders a fixed sequence of Alert invocations so the component can be
//! exercised against every part of its contract. The screen owns the
//! visibility booleans for the dismissible examples; the Alert itself never
//! hides anything.

use crate::i18n::fluent::I18n;
use crate::ui::components::{Alert, AlertVariant, Button, ButtonSize, ButtonVariant};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Playground state: which dismissible examples are currently mounted.
#[derive(Debug, Clone)]
pub struct State {
    /// Whether the dismissible-section example is shown.
    show_dismissible: bool,
    /// Whether the actions-section example is shown.
    show_connection: bool,
    /// Whether the actions-section example has been "retried" into success.
    connection_restored: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Create the initial playground state with every example visible.
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_dismissible: true,
            show_connection: true,
            connection_restored: false,
        }
    }

    /// Whether the dismissible example is currently mounted.
    #[must_use]
    pub fn dismissible_shown(&self) -> bool {
        self.show_dismissible
    }

    /// Whether the actions example is currently mounted.
    #[must_use]
    pub fn connection_shown(&self) -> bool {
        self.show_connection
    }

    /// Whether the actions example has been retried into its success state.
    #[must_use]
    pub fn connection_restored(&self) -> bool {
        self.connection_restored
    }
}

/// Messages emitted by the playground.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismissible example's close control was activated.
    DismissExample,
    /// The restore button for the dismissible example was pressed.
    RestoreExample,
    /// The "Retry" action on the connection example was pressed.
    RetryConnection,
    /// The connection example was dismissed.
    DismissConnection,
    /// The restore button for the connection example was pressed.
    RestoreConnection,
}

/// Process a playground message. All effects are local toggles.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::DismissExample => {
            state.show_dismissible = false;
        }
        Message::RestoreExample => {
            state.show_dismissible = true;
        }
        Message::RetryConnection => {
            state.connection_restored = true;
        }
        Message::DismissConnection => {
            state.show_connection = false;
        }
        Message::RestoreConnection => {
            state.show_connection = true;
            state.connection_restored = false;
        }
    }
}

/// Contextual data needed to render the playground.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the playground screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(build_instructions(&ctx))
        .push(build_variants_section(&ctx))
        .push(build_titles_section(&ctx))
        .push(build_dismissible_section(&ctx))
        .push(build_actions_section(&ctx))
        .push(build_real_world_section(&ctx));

    content.into()
}

/// Build the instructions card shown above the examples.
fn build_instructions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("challenge-instructions-title"))
        .size(typography::TITLE_SM)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..iced::Font::default()
        })
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(crate::ui::design_tokens::palette::PRIMARY_900),
        });

    let bullet = |key: &str| -> Element<'a, Message> {
        Text::new(format!("• {}", i18n.tr(key)))
            .size(typography::BODY)
            .into()
    };

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("challenge-instructions-intro")).size(typography::BODY))
        .push(bullet("challenge-instructions-variants"))
        .push(bullet("challenge-instructions-optional-title"))
        .push(bullet("challenge-instructions-dismiss"))
        .push(bullet("challenge-instructions-stretch"))
        .push(Text::new(i18n.tr("challenge-instructions-footer")).size(typography::BODY_SM));

    let card = Column::new().spacing(spacing::SM).push(title).push(body);

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::instructions)
        .into()
}

/// SECTION: Basic Variants
fn build_variants_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let alerts = Column::new()
        .spacing(spacing::MD)
        .push(Alert::text(i18n.tr("playground-variant-info")).view())
        .push(
            Alert::text(i18n.tr("playground-variant-success"))
                .variant(AlertVariant::Success)
                .view(),
        )
        .push(
            Alert::text(i18n.tr("playground-variant-warning"))
                .variant(AlertVariant::Warning)
                .view(),
        )
        .push(
            Alert::text(i18n.tr("playground-variant-error"))
                .variant(AlertVariant::Error)
                .view(),
        );

    build_section(i18n.tr("playground-section-variants"), alerts.into())
}

/// SECTION: With Titles
fn build_titles_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let alerts = Column::new()
        .spacing(spacing::MD)
        .push(
            Alert::text(i18n.tr("playground-titled-info-body"))
                .title(i18n.tr("playground-titled-info-title"))
                .view(),
        )
        .push(
            Alert::text(i18n.tr("playground-titled-success-body"))
                .variant(AlertVariant::Success)
                .title(i18n.tr("playground-titled-success-title"))
                .view(),
        )
        .push(
            Alert::text(i18n.tr("playground-titled-warning-body"))
                .variant(AlertVariant::Warning)
                .title(i18n.tr("playground-titled-warning-title"))
                .view(),
        )
        .push(
            Alert::text(i18n.tr("playground-titled-error-body"))
                .variant(AlertVariant::Error)
                .title(i18n.tr("playground-titled-error-title"))
                .view(),
        );

    build_section(i18n.tr("playground-section-titles"), alerts.into())
}

/// SECTION: Dismissible
///
/// Demonstrates caller-owned visibility: the alert's close control emits
/// `DismissExample`, this screen unmounts the alert, and a restore button
/// takes its place.
fn build_dismissible_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let content: Element<'a, Message> = if ctx.state.show_dismissible {
        Alert::text(i18n.tr("playground-dismissible-body"))
            .title(i18n.tr("playground-dismissible-title"))
            .dismissible(true)
            .on_dismiss(Message::DismissExample)
            .view()
    } else {
        Button::new(i18n.tr("playground-restore-button"))
            .on_press(Message::RestoreExample)
            .view()
    };

    build_section(i18n.tr("playground-section-dismissible"), content)
}

/// SECTION: With Actions
///
/// The error alert carries an actions slot; "Retry" flips it into a
/// dismissible success alert, and dismissal brings back a restore button.
fn build_actions_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let content: Element<'a, Message> = if !ctx.state.show_connection {
        Button::new(i18n.tr("playground-restore-button"))
            .on_press(Message::RestoreConnection)
            .view()
    } else if ctx.state.connection_restored {
        Alert::text(i18n.tr("playground-variant-success"))
            .variant(AlertVariant::Success)
            .dismissible(true)
            .on_dismiss(Message::DismissConnection)
            .view()
    } else {
        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                Button::new(i18n.tr("playground-action-retry"))
                    .size(ButtonSize::Small)
                    .on_press(Message::RetryConnection)
                    .view(),
            )
            .push(
                Button::new(i18n.tr("playground-action-dismiss"))
                    .variant(ButtonVariant::Ghost)
                    .size(ButtonSize::Small)
                    .on_press(Message::DismissConnection)
                    .view(),
            );

        Alert::text(i18n.tr("playground-actions-body"))
            .variant(AlertVariant::Error)
            .title(i18n.tr("playground-actions-title"))
            .actions(actions)
            .view()
    };

    build_section(i18n.tr("playground-section-actions"), content)
}

/// SECTION: Real-world Examples
fn build_real_world_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let alerts = Column::new()
        .spacing(spacing::MD)
        .push(
            Alert::text(i18n.tr("playground-real-world-info-body"))
                .title(i18n.tr("playground-real-world-info-title"))
                .view(),
        )
        .push(
            Alert::text(i18n.tr("playground-real-world-warning-body"))
                .variant(AlertVariant::Warning)
                .title(i18n.tr("playground-real-world-warning-title"))
                .view(),
        )
        .push(
            Alert::text(i18n.tr("playground-real-world-error-body"))
                .variant(AlertVariant::Error)
                .title(i18n.tr("playground-real-world-error-title"))
                .view(),
        );

    build_section(i18n.tr("playground-section-real-world"), alerts.into())
}

/// Build a titled section wrapping example content.
fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let heading = Text::new(title).size(typography::TITLE_MD).font(iced::Font {
        weight: iced::font::Weight::Semibold,
        ..iced::Font::default()
    });

    Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_shows_every_example() {
        let state = State::new();
        assert!(state.dismissible_shown());
        assert!(state.connection_shown());
        assert!(!state.connection_restored());
    }

    #[test]
    fn dismiss_unmounts_and_restore_remounts() {
        let mut state = State::new();

        update(&mut state, Message::DismissExample);
        assert!(!state.dismissible_shown());

        update(&mut state, Message::RestoreExample);
        assert!(state.dismissible_shown());
    }

    #[test]
    fn retry_flips_connection_into_success() {
        let mut state = State::new();

        update(&mut state, Message::RetryConnection);
        assert!(state.connection_restored());
        assert!(state.connection_shown());
    }

    #[test]
    fn restore_connection_resets_the_retry_flag() {
        let mut state = State::new();

        update(&mut state, Message::RetryConnection);
        update(&mut state, Message::DismissConnection);
        assert!(!state.connection_shown());

        update(&mut state, Message::RestoreConnection);
        assert!(state.connection_shown());
        assert!(!state.connection_restored());
    }

    #[test]
    fn playground_view_renders_every_state() {
        let i18n = I18n::default();

        let mut state = State::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        update(&mut state, Message::DismissExample);
        update(&mut state, Message::RetryConnection);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        update(&mut state, Message::DismissConnection);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
