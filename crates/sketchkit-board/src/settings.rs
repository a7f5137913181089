//! Externally-set tool configuration.
//!
//! The host UI owns the widgets (color picker, width slider, tool dropdown);
//! this struct is the engine-side record of their values, with JSON
//! persistence for sessions that want it. Host-facing ranges (line width
//! 1-30, font size 12-100) are collaborator UI constraints; the engine
//! itself only requires positive, finite values plus the resize-time clamps.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sketchkit_core::{Error, Rgb8};
use std::path::Path;

use crate::tools::Tool;

/// Current tool, stroke color, stroke width, and text font size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub tool: Tool,
    pub color: Rgb8,
    pub line_width: f64,
    pub font_size: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            color: Rgb8::BLACK,
            line_width: 3.0,
            font_size: 24.0,
        }
    }
}

impl ToolSettings {
    /// Validates the numeric fields. Called at the configuration boundary,
    /// never mid-gesture.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(Error::other(format!(
                "line_width must be positive and finite, got {}",
                self.line_width
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(Error::other(format!(
                "font_size must be positive and finite, got {}",
                self.font_size
            )));
        }
        Ok(())
    }

    /// Saves settings as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path.as_ref(), json).context("Failed to write settings file")?;
        Ok(())
    }

    /// Loads and validates settings from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read settings file")?;
        let settings: ToolSettings =
            serde_json::from_str(&content).context("Failed to parse settings file")?;
        settings.validate()?;
        Ok(settings)
    }
}
