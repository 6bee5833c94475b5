// SPDX-License-Identifier: MPL-2.0
//! `kiosk_status` is a simulated kiosk status display built with the Iced GUI
//! framework.
//!
//! On a fixed timer the screen switches at random between an "all systems
//! ready" panel and a fault panel showing an error code, its message and a
//! scannable code linking to a support article. The code is sized from the
//! panel that contains it.

pub mod app;
pub mod barcode;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
