// SPDX-License-Identifier: MPL-2.0
//! Screen geometry shared by the view and the size measurement.
//!
//! The status panel fills the window minus the screen padding and the title
//! band, so its inner size can be derived from the window size alone. The view
//! uses the same constants, keeping the measurement and the layout in step.

use crate::domain::sizing::ContainerSize;
use crate::ui::design_tokens::spacing;
use iced::Size;

/// Padding between the window edge and the screen content.
pub const SCREEN_PADDING: f32 = spacing::LG;

/// Height reserved for the screen title.
pub const TITLE_BAND_HEIGHT: f32 = 48.0;

/// Gap between the title band and the status panel.
pub const TITLE_GAP: f32 = spacing::LG;

/// Inner padding of the status panel.
pub const PANEL_PADDING: f32 = spacing::XL;

/// Inner size of the status panel for a window of the given size.
///
/// Windows smaller than the surrounding chrome produce a zero extent, which
/// the sizing logic treats as "not measured".
#[must_use]
pub fn content_bounds(window: Size) -> ContainerSize {
    let horizontal_chrome = 2.0 * (SCREEN_PADDING + PANEL_PADDING);
    let vertical_chrome = 2.0 * (SCREEN_PADDING + PANEL_PADDING) + TITLE_BAND_HEIGHT + TITLE_GAP;

    ContainerSize::new(
        (window.width - horizontal_chrome).max(0.0),
        (window.height - vertical_chrome).max(0.0),
    )
}
