// SPDX-License-Identifier: MPL-2.0
//! `tokenlab` is a design-token-driven component playground built with the
//! Iced GUI framework.
//!
//! It presents a tab-switchable interview scaffold: a challenge playground
//! exercising an Alert component against a documented token set, and a
//! reference gallery showing the intended patterns with a Button component.
//! It also demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/tokenlab/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
