//! PNG export of the committed buffer.
//!
//! The exported raster is the only persisted artifact a session produces by
//! default; the overlay is never included.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use image::RgbaImage;
use std::path::Path;

use crate::surface::CanvasSurface;

/// Deterministic date-stamped export filename, e.g. `sketch-2026-08-30.png`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("sketch-{}.png", date.format("%Y-%m-%d"))
}

/// Converts the committed buffer to straight-alpha RGBA.
pub fn committed_to_rgba(surface: &CanvasSurface) -> RgbaImage {
    let pixmap = surface.committed();
    let data = pixmap.data();
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let idx = ((y * pixmap.width() + x) * 4) as usize;
        let (r, g, b, a) = (data[idx], data[idx + 1], data[idx + 2], data[idx + 3]);
        // Demultiply so the PNG carries straight alpha.
        if a == 0 {
            image::Rgba([0, 0, 0, 0])
        } else {
            image::Rgba([
                (r as u16 * 255 / a as u16).min(255) as u8,
                (g as u16 * 255 / a as u16).min(255) as u8,
                (b as u16 * 255 / a as u16).min(255) as u8,
                a,
            ])
        }
    })
}

/// Writes the committed buffer to `path` as a PNG.
pub fn write_committed_png(surface: &CanvasSurface, path: impl AsRef<Path>) -> Result<()> {
    let rgba = committed_to_rgba(surface);
    rgba.save(path.as_ref())
        .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
    Ok(())
}
