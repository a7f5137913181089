//! Placed-object model: the identity-bearing drawables tracked by the store.
//!
//! A placed object is distinct from raw pixel strokes: it survives repaints,
//! can be hit-tested, selected, dragged, and resized. The set of kinds is a
//! closed enum so every operation matches exhaustively.

use serde::{Deserialize, Serialize};
use sketchkit_core::{Bounds, Point};

mod image;
mod text;

pub use image::{pixmap_from_rgba, ImageObject};
pub use text::TextObject;

/// Discriminator for the kinds of placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Text,
    Image,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// A drawable placed on the sketch board.
///
/// Identity (id and kind) is immutable after creation; position and extent
/// are not. Later variants follow the same `{origin, extent, id}` shape so
/// bounds computation stays uniform.
#[derive(Debug, Clone)]
pub enum SketchObject {
    Text(TextObject),
    Image(ImageObject),
}

impl SketchObject {
    /// The stable id issued by the store at creation.
    pub fn id(&self) -> u64 {
        match self {
            SketchObject::Text(t) => t.id,
            SketchObject::Image(i) => i.id,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            SketchObject::Text(_) => ObjectKind::Text,
            SketchObject::Image(_) => ObjectKind::Image,
        }
    }

    /// Axis-aligned bounding box in canvas coordinates.
    pub fn bounds(&self) -> Bounds {
        match self {
            SketchObject::Text(t) => t.bounds(),
            SketchObject::Image(i) => i.bounds(),
        }
    }

    /// Inclusive point-in-bounds test.
    pub fn contains_point(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Moves the object so its bounding-box origin lands at `(x, y)`.
    ///
    /// For text this restores the baseline from the box top, since the stored
    /// y is the baseline rather than the bounds origin.
    pub fn set_bounds_origin(&mut self, x: f64, y: f64) {
        match self {
            SketchObject::Text(t) => {
                t.x = x;
                t.y = y + t.font_size;
            }
            SketchObject::Image(i) => {
                i.x = x;
                i.y = y;
            }
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            SketchObject::Text(t) => {
                t.x += dx;
                t.y += dy;
            }
            SketchObject::Image(i) => {
                i.x += dx;
                i.y += dy;
            }
        }
    }
}
