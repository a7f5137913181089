//! Error handling for SketchKit
//!
//! Provides structured error types for each layer of the sketch board:
//! - Object errors (degenerate placed objects rejected before insertion)
//! - Decode errors (raster data that could not be decoded)
//! - History errors (undo/redo against an empty stack)
//! - Surface errors (invalid raster targets)
//! - Export errors (the committed buffer could not be written out)
//!
//! All error types use `thiserror` for ergonomic error handling. None of
//! these errors is fatal to the process: object errors are swallowed at the
//! insertion boundary, history errors degrade to a no-op frame, and decode
//! failures abandon the insertion without mutating any state.

use thiserror::Error;

/// Invalid placed-object error
///
/// Raised when a text or image object fails validation before it reaches
/// the object store. Recovered locally by the engine and never surfaced
/// to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjectError {
    /// Text content is empty or whitespace-only
    #[error("Text content is empty")]
    EmptyText,

    /// Image width or height is zero or negative
    #[error("Image dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
}

/// Raster decode error
///
/// Raised when inserted image bytes cannot be decoded. Surfaced to the
/// caller as a user-visible failure; the insertion is abandoned and no
/// engine state is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The data was recognized but could not be decoded
    #[error("Failed to decode image: {reason}")]
    Malformed {
        /// The reason decoding failed.
        reason: String,
    },

    /// The data is in a format the decoder does not support
    #[error("Unsupported image format: {reason}")]
    UnsupportedFormat {
        /// The reason the format was rejected.
        reason: String,
    },
}

/// History error
///
/// Raised when undo or redo is requested with no snapshot to apply.
/// Treated as a no-op by the engine, not surfaced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Undo requested with an empty undo stack
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Redo requested with an empty redo stack
    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Raster surface error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// A raster target with a zero-area size was requested
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize {
        /// The rejected width in pixels.
        width: u32,
        /// The rejected height in pixels.
        height: u32,
    },
}

/// Export error
///
/// Raised when the committed buffer cannot be encoded or written to disk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The committed buffer could not be encoded
    #[error("Failed to encode committed buffer: {reason}")]
    Encode {
        /// The reason encoding failed.
        reason: String,
    },

    /// The encoded image could not be written
    #[error("Failed to write {path}: {reason}")]
    Write {
        /// The destination path.
        path: String,
        /// The reason the write failed.
        reason: String,
    },
}

/// Color parse error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The value is not a `#rrggbb` hex string
    #[error("Invalid color '{value}': expected a #rrggbb hex string")]
    InvalidHex {
        /// The rejected input.
        value: String,
    },
}

/// Main error type for SketchKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid placed object
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// Raster decode failure
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Empty history
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Invalid raster surface
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Export failure
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Color parse failure
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an invalid-object error
    pub fn is_object_error(&self) -> bool {
        matches!(self, Error::Object(_))
    }

    /// Check if this is a decode failure
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is an empty-history error
    pub fn is_history_error(&self) -> bool {
        matches!(self, Error::History(_))
    }

    /// Check if this is an export failure
    pub fn is_export_error(&self) -> bool {
        matches!(self, Error::Export(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
