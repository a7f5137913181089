//! Geometry primitives for the sketch board.
//!
//! Pure axis-aligned bounds math: bounding boxes, inclusive point-in-box
//! tests, and the resize-handle hit region. Canvas coordinates have the
//! origin at the top-left with y growing downward.

use serde::{Deserialize, Serialize};

/// Side length of the square resize handle, in canvas units.
pub const HANDLE_SIZE: f64 = 8.0;

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding box with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized bounds spanning two corner points in any orientation.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment test: points on any edge count as inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// The resize-handle hit region: a fixed `HANDLE_SIZE` square centered
    /// on the bottom-right corner of these bounds.
    pub fn handle_rect(&self) -> Bounds {
        Bounds {
            x: self.right() - HANDLE_SIZE / 2.0,
            y: self.bottom() - HANDLE_SIZE / 2.0,
            width: HANDLE_SIZE,
            height: HANDLE_SIZE,
        }
    }
}
