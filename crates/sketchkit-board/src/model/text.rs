//! Text objects anchored at a baseline point.

use sketchkit_core::{Bounds, Rgb8};

use crate::font_manager;

/// A piece of text placed on the board.
///
/// `y` is the text baseline, not the bounding-box top. The bounding box uses
/// the font size directly for its height (top = `y - font_size`), an
/// approximation that skips true ascent/descent metrics; hit-testing on text
/// is therefore approximate by intent.
#[derive(Debug, Clone, PartialEq)]
pub struct TextObject {
    pub id: u64,
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: Rgb8,
}

impl TextObject {
    pub fn new(
        id: u64,
        content: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
        color: Rgb8,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            x,
            y,
            font_size,
            color,
        }
    }

    /// Bounding box: width from text measurement, height from the font size.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.x,
            self.y - self.font_size,
            font_manager::measure_width(&self.content, self.font_size),
            self.font_size,
        )
    }
}
