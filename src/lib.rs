//! # SketchKit
//!
//! A Rust-based freehand sketch and annotation engine with:
//! - Pen and eraser strokes drawn directly into a committed raster
//! - Eight two-point shape tools previewed live on a transient overlay
//! - Text and raster-image objects with selection, drag, and resize
//! - Snapshot-based undo/redo and date-stamped PNG export
//!
//! ## Architecture
//!
//! SketchKit is organized as a workspace with multiple crates:
//!
//! 1. **sketchkit-core** - Geometry primitives, color values, error taxonomy
//! 2. **sketchkit-board** - The sketch board engine: object store, selection,
//!    history, raster surfaces, gesture dispatch
//! 3. **sketchkit** - Main binary running a scripted demo session
//!
//! The engine is host-agnostic and single-threaded: the host hands it
//! pointer events and configuration, and reads back a composited raster.

pub use sketchkit_board::{
    CanvasSurface, GestureState, HistoryManager, ObjectStore, SelectionManager, SketchEngine,
    SketchFile, SketchObject, Tool, ToolSettings,
};
pub use sketchkit_core::{Bounds, Error, Point, Result, Rgb8};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
