//! Raster image objects with a top-left origin.

use sketchkit_core::{Bounds, DecodeError};
use tiny_skia::Pixmap;

/// An inserted raster image.
///
/// `width`/`height` are the display extent in canvas units and are what the
/// resize handle mutates; the owned pixmap keeps its ingestion resolution and
/// is scaled to the stored extent at paint time.
#[derive(Debug, Clone)]
pub struct ImageObject {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub pixmap: Pixmap,
}

impl ImageObject {
    pub fn new(id: u64, pixmap: Pixmap, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            pixmap,
        }
    }

    /// Bounds are exactly the stored origin and extent.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// Converts a straight-alpha RGBA image into a premultiplied pixmap.
pub fn pixmap_from_rgba(rgba: &image::RgbaImage) -> Result<Pixmap, DecodeError> {
    let (w, h) = rgba.dimensions();
    let mut pixmap = Pixmap::new(w, h).ok_or_else(|| DecodeError::Malformed {
        reason: format!("zero-sized image {}x{}", w, h),
    })?;

    let data = pixmap.data_mut();
    for (i, pixel) in rgba.pixels().enumerate() {
        let [r, g, b, a] = pixel.0;
        let idx = i * 4;
        data[idx] = (r as u16 * a as u16 / 255) as u8;
        data[idx + 1] = (g as u16 * a as u16 / 255) as u8;
        data[idx + 2] = (b as u16 * a as u16 / 255) as u8;
        data[idx + 3] = a;
    }
    Ok(pixmap)
}
