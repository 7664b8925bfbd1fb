// SPDX-License-Identifier: MPL-2.0
//! Internationalization via Fluent bundles embedded at compile time.

pub mod fluent;
