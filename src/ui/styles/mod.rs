// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the status screen widgets.

pub mod container;
