// SPDX-License-Identifier: MPL-2.0
//! Centralized styles shared across screens.
//!
//! Component-specific treatments (alert surfaces, button variants, tab
//! underline) live next to their components; this module holds the styles
//! that several screens share.

pub mod container;
