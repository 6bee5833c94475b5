// SPDX-License-Identifier: MPL-2.0
//! Scannable code generation.
//!
//! A payload is encoded once into a QR module matrix, then rasterized to a
//! square RGBA image whenever the display size changes. Rasterization keeps a
//! whole number of pixels per module, never fewer than [`MIN_MODULE_PX`], so
//! the image stays readable when the view scales it to the measured size.

use crate::domain::sizing::QrSize;
use crate::error::Result;
use iced::widget::image::Handle;
use image_rs::{Rgba, RgbaImage};
use qrcode::{Color, QrCode};

/// Blank modules around the symbol required by scanners.
pub const QUIET_ZONE: usize = 4;

/// Smallest edge of a module in the raster, in pixels.
pub const MIN_MODULE_PX: u32 = 4;

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// QR module matrix for a text payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannableCode {
    payload: String,
    width: usize,
    dark: Vec<bool>,
}

impl ScannableCode {
    /// Encodes `payload` byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Barcode`](crate::error::Error::Barcode) if the payload
    /// does not fit in any QR version.
    pub fn encode(payload: &str) -> Result<Self> {
        let code = QrCode::new(payload.as_bytes())?;
        let width = code.width();
        let dark = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();

        Ok(Self {
            payload: payload.to_string(),
            width,
            dark,
        })
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Symbol width in modules, without the quiet zone.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Symbol width in modules, including the quiet zone on both sides.
    #[must_use]
    pub fn padded_width(&self) -> usize {
        self.width + 2 * QUIET_ZONE
    }

    #[must_use]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Renders the code as a square image covering at least `size` pixels.
    ///
    /// Every module is a whole square of at least [`MIN_MODULE_PX`] pixels and
    /// the padded symbol fills the image edge to edge. The view scales the
    /// image down to `size` on screen.
    #[must_use]
    pub fn rasterize(&self, size: QrSize) -> RgbaImage {
        let padded = self.padded_width() as u32;
        let scale = size.value().div_ceil(padded).max(MIN_MODULE_PX);
        let side = scale * padded;
        let offset = QUIET_ZONE as u32 * scale;

        let mut image = RgbaImage::from_pixel(side, side, LIGHT);
        for y in 0..self.width {
            for x in 0..self.width {
                if !self.is_dark(x, y) {
                    continue;
                }
                let left = offset + x as u32 * scale;
                let top = offset + y as u32 * scale;
                for py in top..top + scale {
                    for px in left..left + scale {
                        image.put_pixel(px, py, DARK);
                    }
                }
            }
        }
        image
    }

    /// Renders the code and wraps it in an Iced image handle.
    #[must_use]
    pub fn to_handle(&self, size: QrSize) -> Handle {
        let image = self.rasterize(size);
        let (width, height) = image.dimensions();
        Handle::from_rgba(width, height, image.into_raw())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::decode;
    use super::*;
    use crate::domain::fault::{Catalog, SUPPORT_ARTICLE_URL};
    use crate::domain::sizing::ContainerSize;

    fn qr_size(side: f32) -> QrSize {
        QrSize::from_container(ContainerSize::new(side, side)).expect("measured")
    }

    #[test]
    fn raster_covers_requested_size() {
        let code = ScannableCode::encode(SUPPORT_ARTICLE_URL).expect("encode");
        let size = qr_size(1500.0);
        let image = code.rasterize(size);
        let padded = code.padded_width() as u32;

        assert_eq!(image.width(), image.height());
        assert!(image.width() >= size.value());
        assert!(image.width() < size.value() + padded);
        assert_eq!(image.width() % padded, 0);
    }

    #[test]
    fn small_sizes_keep_minimum_module_edge() {
        let code = ScannableCode::encode(SUPPORT_ARTICLE_URL).expect("encode");
        let image = code.rasterize(qr_size(100.0));
        let padded = code.padded_width() as u32;
        assert_eq!(image.width(), padded * MIN_MODULE_PX);
    }

    #[test]
    fn raster_never_drops_modules() {
        let code = ScannableCode::encode(SUPPORT_ARTICLE_URL).expect("encode");
        let image = code.rasterize(qr_size(10.0));
        let padded = code.padded_width() as u32;
        assert!(image.width() >= padded * MIN_MODULE_PX);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn quiet_zone_stays_light() {
        let code = ScannableCode::encode("quiet").expect("encode");
        let image = code.rasterize(qr_size(400.0));
        for x in 0..image.width() {
            assert_eq!(*image.get_pixel(x, 0), LIGHT);
            assert_eq!(*image.get_pixel(x, image.height() - 1), LIGHT);
        }
    }

    #[test]
    fn every_catalog_url_decodes_back() {
        for record in Catalog::builtin().iter() {
            let code = ScannableCode::encode(&record.url).expect("encode");
            let decoded = decode(&code.rasterize(qr_size(600.0)));
            assert_eq!(decoded, vec![record.url.clone()]);
        }
    }

    #[test]
    fn every_catalog_url_decodes_at_minimum_size() {
        let minimum = qr_size(100.0);
        assert_eq!(minimum.value(), 80);
        for record in Catalog::builtin().iter() {
            let code = ScannableCode::encode(&record.url).expect("encode");
            for size in [minimum, qr_size(215.0)] {
                let decoded = decode(&code.rasterize(size));
                assert_eq!(decoded, vec![record.url.clone()], "size {}", size.value());
            }
        }
    }

    #[test]
    fn minimum_size_still_decodes() {
        let code = ScannableCode::encode("https://example.com/kb/120").expect("encode");
        let decoded = decode(&code.rasterize(qr_size(100.0)));
        assert_eq!(decoded, vec!["https://example.com/kb/120".to_string()]);
    }

    #[test]
    fn payload_is_kept() {
        let code = ScannableCode::encode("abc").expect("encode");
        assert_eq!(code.payload(), "abc");
        assert!(code.width() >= 21);
        assert!(!code.is_dark(code.width(), 0));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = "x".repeat(8_000);
        assert!(ScannableCode::encode(&payload).is_err());
    }
}
