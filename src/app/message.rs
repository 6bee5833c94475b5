// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use iced::{window, Size};
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The simulation timer fired.
    Tick(Instant),
    /// The main window appeared with its initial size.
    WindowOpened { id: window::Id, size: Size },
    /// The window was resized; the status panel must be re-measured.
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Each flag, when set, takes precedence over the matching `settings.toml`
/// entry.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Fixed seed for a reproducible sequence of states.
    pub seed: Option<u64>,
    /// Seconds between simulated state changes.
    pub interval_secs: Option<u64>,
    /// Start in fullscreen.
    pub fullscreen: bool,
}
