// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`playground`] - Challenge playground exercising the Alert component
//! - [`reference`] - Reference gallery for the Button component and tokens
//!
//! # Shared Infrastructure
//!
//! - [`components`] - The Alert and Button components
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized shared styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`header`] - Application header
//! - [`tab_bar`] - Challenge/Reference tab switcher

pub mod components;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod playground;
pub mod reference;
pub mod styles;
pub mod tab_bar;
pub mod theming;
pub mod widgets;
