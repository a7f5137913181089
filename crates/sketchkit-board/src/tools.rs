//! The closed tool set and its wire names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Active tool for the sketch board.
///
/// The serialized names (`select`, `pen`, ..., `fillTriangle`, `text`) are
/// the configuration wire format; `FromStr`/`Display` round-trip them
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    Select,
    #[default]
    Pen,
    Eraser,
    Line,
    Arrow,
    Rect,
    FillRect,
    Circle,
    FillCircle,
    Triangle,
    FillTriangle,
    Text,
}

/// Freehand stroke variants, drawn directly into the committed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Pen,
    Eraser,
}

/// Two-point geometric shapes, previewed on the overlay and committed on
/// release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Arrow,
    Rect,
    FillRect,
    Circle,
    FillCircle,
    Triangle,
    FillTriangle,
}

impl ShapeKind {
    /// Whether the shape is painted filled rather than stroked.
    pub fn is_filled(self) -> bool {
        matches!(self, Self::FillRect | Self::FillCircle | Self::FillTriangle)
    }
}

impl Tool {
    /// The stroke kind for freehand tools, `None` otherwise.
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            Tool::Pen => Some(StrokeKind::Pen),
            Tool::Eraser => Some(StrokeKind::Eraser),
            _ => None,
        }
    }

    /// The shape kind for geometric tools, `None` otherwise.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Arrow => Some(ShapeKind::Arrow),
            Tool::Rect => Some(ShapeKind::Rect),
            Tool::FillRect => Some(ShapeKind::FillRect),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::FillCircle => Some(ShapeKind::FillCircle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::FillTriangle => Some(ShapeKind::FillTriangle),
            _ => None,
        }
    }

    /// Wire name of this tool.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Arrow => "arrow",
            Tool::Rect => "rect",
            Tool::FillRect => "fillRect",
            Tool::Circle => "circle",
            Tool::FillCircle => "fillCircle",
            Tool::Triangle => "triangle",
            Tool::FillTriangle => "fillTriangle",
            Tool::Text => "text",
        }
    }

    /// Parses a tool name, warning and falling back to the default tool on
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Tool {
        match name.parse() {
            Ok(tool) => tool,
            Err(_) => {
                warn!("Unknown tool '{}', defaulting to {}", name, Tool::default());
                Tool::default()
            }
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a tool name is not one of the recognized twelve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToolError(pub String);

impl std::fmt::Display for UnknownToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown tool '{}'", self.0)
    }
}

impl std::error::Error for UnknownToolError {}

impl FromStr for Tool {
    type Err = UnknownToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "select" => Tool::Select,
            "pen" => Tool::Pen,
            "eraser" => Tool::Eraser,
            "line" => Tool::Line,
            "arrow" => Tool::Arrow,
            "rect" => Tool::Rect,
            "fillRect" => Tool::FillRect,
            "circle" => Tool::Circle,
            "fillCircle" => Tool::FillCircle,
            "triangle" => Tool::Triangle,
            "fillTriangle" => Tool::FillTriangle,
            "text" => Tool::Text,
            other => return Err(UnknownToolError(other.to_string())),
        })
    }
}
