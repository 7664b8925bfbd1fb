// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::playground;
use crate::ui::reference;
use crate::ui::tab_bar;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    TabBar(tab_bar::Message),
    Playground(playground::Message),
    Reference(reference::Message),
    /// Periodic tick advancing the loading-spinner rotation.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme mode override (`light`, `dark`, `system`).
    pub theme: Option<ThemeMode>,
}
