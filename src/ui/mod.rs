// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! - [`status`] - Ready and fault panels, and the scannable code cache
//! - [`layout`] - Screen geometry shared by the view and the size measurement
//! - [`styles`] - Centralized container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod layout;
pub mod status;
pub mod styles;
pub mod theming;
