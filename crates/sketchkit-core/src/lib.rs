//! # SketchKit Core
//!
//! Core types and utilities for SketchKit.
//! Provides the geometry primitives, color values, and error taxonomy
//! shared by the sketch board engine.

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Rgb8;
pub use error::{
    ColorError, DecodeError, Error, ExportError, HistoryError, ObjectError, Result, SurfaceError,
};
pub use geometry::{Bounds, Point, HANDLE_SIZE};
