// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core rules of the status monitor, free of UI types.
//!
//! # Modules
//!
//! - [`fault`]: Fault records and the validated [`Catalog`](fault::Catalog)
//! - [`monitor`]: The randomized [`Monitor`](monitor::Monitor) and its
//!   [`DisplayState`](monitor::DisplayState)
//! - [`sizing`]: Responsive [`QrSize`](sizing::QrSize) derivation

pub mod fault;
pub mod monitor;
pub mod sizing;
