//! # SketchKit Board
//!
//! The freehand sketch and annotation engine: an engine-agnostic 2D drawing
//! surface with multiple tools (pen, eraser, geometric shapes, text, raster
//! images), an explicit object model for placed elements, hit-testing-based
//! selection with drag/resize manipulation, and snapshot undo/redo.
//!
//! ## Core Components
//!
//! - [`SketchEngine`] - one editing session; owns all state and dispatches
//!   pointer events
//! - [`ObjectStore`] - ordered, id-issuing collection of placed objects
//! - [`SelectionManager`] - single selection, topmost-first picking, resize
//!   handle hit region
//! - [`HistoryManager`] - snapshot undo/redo stacks
//! - [`CanvasSurface`] - committed raster plus transient overlay
//! - [`GestureState`] - the pointer-gesture state machine
//!
//! ## Architecture
//!
//! The engine is single-threaded and event-driven: every transition happens
//! synchronously inside a pointer callback. Pen and eraser strokes go
//! straight into the committed buffer; shape tools preview on the overlay
//! and commit on release; object mutations trigger a full "clear then
//! redraw in store order" repaint, never an incremental one. Every
//! completed action pushes one immutable history snapshot.

pub mod controller;
pub mod engine;
pub mod export;
pub mod font_manager;
pub mod history;
pub mod model;
pub mod selection;
pub mod serialization;
pub mod settings;
pub mod store;
pub mod surface;
pub mod tools;

pub use controller::GestureState;
pub use engine::{SketchEngine, DEFAULT_IMAGE_MAX_WIDTH, MIN_FONT_SIZE, MIN_OBJECT_DIMENSION};
pub use history::{HistoryManager, Snapshot, DEFAULT_MAX_DEPTH};
pub use model::{ImageObject, ObjectKind, SketchObject, TextObject};
pub use selection::SelectionManager;
pub use serialization::{ObjectData, SketchFile, SketchMetadata};
pub use settings::ToolSettings;
pub use store::ObjectStore;
pub use surface::CanvasSurface;
pub use tools::{ShapeKind, StrokeKind, Tool, UnknownToolError};
