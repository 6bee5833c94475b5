// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Monitor**: Timer period and fault probability
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Monitor Defaults
// ==========================================================================

/// Default period between simulated state changes (in seconds).
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 10;

/// Minimum tick period (in seconds).
pub const MIN_TICK_INTERVAL_SECS: u64 = 1;

/// Maximum tick period (in seconds).
pub const MAX_TICK_INTERVAL_SECS: u64 = 3600;

/// Default probability that a tick shows a fault.
pub const DEFAULT_FAULT_PROBABILITY: f64 = crate::domain::monitor::probability_bounds::DEFAULT;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
