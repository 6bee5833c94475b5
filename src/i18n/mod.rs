// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at build time from `assets/i18n/`
//! - Variable substitution (`{ $code }`) without bidi isolation marks
//! - Fallback to `en-US`, then to a visible `MISSING:` marker

pub mod fluent;
