// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the playground and the
//! reference gallery.
//!
//! The `App` struct wires together the screens, localization, and theme
//! preferences, and translates tab-bar events into screen switches. Policy
//! decisions (window sizing, locale resolution order, spinner cadence) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::playground;
use crate::ui::reference;
use crate::ui::tab_bar;
use crate::ui::theming::ThemeMode;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::f32::consts::PI;
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// How far the spinner advances per tick, and how often it ticks.
const SPINNER_STEP: f32 = PI / 15.0;
const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Root Iced application state bridging the screens, localization, and
/// theme preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    playground: playground::State,
    theme_mode: ThemeMode,
    /// Rotation of the reference gallery's loading spinner, in radians.
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App").field("screen", &self.screen).finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Challenge,
            playground: playground::State::new(),
            theme_mode: ThemeMode::default(),
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// CLI flags received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = App {
            i18n,
            theme_mode: flags.theme.or(config.theme_mode).unwrap_or_default(),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        // The loading-state button only exists on the reference gallery;
        // everything else is static, so the tick stops off-screen.
        if self.screen == Screen::Reference {
            time::every(SPINNER_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabBar(tab_message) => {
                match tab_bar::update(&tab_message) {
                    tab_bar::Event::SelectChallenge => self.screen = Screen::Challenge,
                    tab_bar::Event::SelectReference => self.screen = Screen::Reference,
                }
                Task::none()
            }
            Message::Playground(playground_message) => {
                playground::update(&mut self.playground, playground_message);
                Task::none()
            }
            Message::Reference(reference::Message::DemoPressed) => {
                // Gallery buttons demonstrate affordances only.
                Task::none()
            }
            Message::Tick(_instant) => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % (2.0 * PI);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            playground: &self.playground,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use std::time::Instant;
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn new_starts_on_the_challenge_tab() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Challenge);
            assert!(app.playground.dismissible_shown());
        });
    }

    #[test]
    fn cli_theme_flag_overrides_config() {
        with_temp_config_dir(|config_root| {
            let config_dir = config_root.join("TokenLab");
            fs::create_dir_all(&config_dir).expect("dir");
            fs::write(config_dir.join("settings.toml"), "theme_mode = \"dark\"\n")
                .expect("write config");

            let (from_config, _) = App::new(Flags::default());
            assert_eq!(from_config.theme_mode, ThemeMode::Dark);

            let (from_cli, _) = App::new(Flags {
                theme: Some(ThemeMode::Light),
                ..Flags::default()
            });
            assert_eq!(from_cli.theme_mode, ThemeMode::Light);
        });
    }

    #[test]
    fn tab_selection_switches_screens() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::Challenge);

        let _ = app.update(Message::TabBar(tab_bar::Message::SelectReference));
        assert_eq!(app.screen, Screen::Reference);

        let _ = app.update(Message::TabBar(tab_bar::Message::SelectChallenge));
        assert_eq!(app.screen, Screen::Challenge);
    }

    #[test]
    fn dismiss_and_restore_flow_through_the_shell() {
        let mut app = App::default();

        let _ = app.update(Message::Playground(playground::Message::DismissExample));
        assert!(!app.playground.dismissible_shown());

        let _ = app.update(Message::Playground(playground::Message::RestoreExample));
        assert!(app.playground.dismissible_shown());
    }

    #[test]
    fn retry_then_dismiss_resolves_the_connection_example() {
        let mut app = App::default();

        let _ = app.update(Message::Playground(playground::Message::RetryConnection));
        assert!(app.playground.connection_restored());

        let _ = app.update(Message::Playground(playground::Message::DismissConnection));
        assert!(!app.playground.connection_shown());

        let _ = app.update(Message::Playground(playground::Message::RestoreConnection));
        assert!(app.playground.connection_shown());
        assert!(!app.playground.connection_restored());
    }

    #[test]
    fn ticks_advance_and_wrap_the_spinner() {
        let mut app = App::default();
        let initial = app.spinner_rotation;

        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner_rotation > initial);

        // A full cycle of ticks stays within one revolution.
        for _ in 0..100 {
            let _ = app.update(Message::Tick(Instant::now()));
        }
        assert!(app.spinner_rotation >= 0.0);
        assert!(app.spinner_rotation < 2.0 * PI);
    }

    #[test]
    fn demo_presses_change_nothing() {
        let mut app = App::default();
        let screen_before = app.screen;
        let rotation_before = app.spinner_rotation;

        let _ = app.update(Message::Reference(reference::Message::DemoPressed));

        assert_eq!(app.screen, screen_before);
        assert_eq!(app.spinner_rotation, rotation_before);
        assert!(app.playground.dismissible_shown());
    }

    #[test]
    fn title_resolves_through_i18n() {
        let app = App::default();
        assert_eq!(app.title(), "TokenLab");
    }

    #[test]
    fn fixed_theme_modes_map_to_iced_themes() {
        let app = App {
            theme_mode: ThemeMode::Light,
            ..App::default()
        };
        assert_eq!(app.theme(), Theme::Light);

        let app = App {
            theme_mode: ThemeMode::Dark,
            ..App::default()
        };
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn view_renders_both_screens() {
        let mut app = App::default();
        let _ = app.view();

        let _ = app.update(Message::TabBar(tab_bar::Message::SelectReference));
        let _ = app.view();
    }
}
