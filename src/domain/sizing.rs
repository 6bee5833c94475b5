// SPDX-License-Identifier: MPL-2.0
//! Responsive sizing of the scannable code.
//!
//! The code image side length follows the content container: 40% of its
//! shorter side, floored, and never below 80 pixels. A container that has not
//! been laid out yet produces no size at all, which hides the code image.

// =============================================================================
// Bounds
// =============================================================================

/// Scannable code sizing constants.
pub mod qr_bounds {
    /// Fraction of the container's shorter side used for the code.
    pub const RATIO: f64 = 0.4;
    /// Smallest side length in pixels.
    pub const MIN_PX: u32 = 80;
}

// =============================================================================
// ContainerSize
// =============================================================================

/// Measured size of the content container, in logical pixels.
///
/// Negative and non-finite inputs are stored as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    width: f32,
    height: f32,
}

impl ContainerSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns whether both sides have a non-zero extent.
    #[must_use]
    pub fn is_measured(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn shorter_side(self) -> f32 {
        self.width.min(self.height)
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// QrSize
// =============================================================================

/// Side length of the scannable code image, guaranteed to be at least
/// [`qr_bounds::MIN_PX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QrSize(u32);

impl QrSize {
    /// Derives the code size from a container measurement.
    ///
    /// Returns `None` when the container has no usable extent.
    #[must_use]
    pub fn from_container(container: ContainerSize) -> Option<Self> {
        if !container.is_measured() {
            return None;
        }
        let desired = (qr_bounds::RATIO * f64::from(container.shorter_side())).floor();
        // Saturating float-to-int cast; huge windows simply cap at u32::MAX.
        let desired = desired as u32;
        Some(Self(desired.max(qr_bounds::MIN_PX)))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

// =============================================================================
// Sizing
// =============================================================================

/// Last container measurement and the code size derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sizing {
    container: Option<ContainerSize>,
    qr: Option<QrSize>,
}

impl Sizing {
    /// Records a new container measurement.
    ///
    /// Returns true if the derived code size changed.
    pub fn measure(&mut self, container: ContainerSize) -> bool {
        self.container = Some(container);
        self.refresh()
    }

    /// Recomputes the code size from the last measurement.
    ///
    /// Returns true if the derived code size changed.
    pub fn refresh(&mut self) -> bool {
        let next = self.container.and_then(QrSize::from_container);
        let changed = next != self.qr;
        self.qr = next;
        changed
    }

    #[must_use]
    pub fn container(&self) -> Option<ContainerSize> {
        self.container
    }

    #[must_use]
    pub fn qr_size(&self) -> Option<QrSize> {
        self.qr
    }
}
