//! Save/load for sketch documents.
//!
//! JSON format with complete board state: tool settings, placed objects,
//! and the committed raster (PNG-encoded). History is session-local and is
//! never serialized.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sketchkit_core::Rgb8;
use std::path::Path;
use tiny_skia::Pixmap;

use crate::model::{ImageObject, ObjectKind, SketchObject, TextObject};
use crate::settings::ToolSettings;

/// Sketch file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete sketch document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchFile {
    pub version: String,
    pub metadata: SketchMetadata,
    pub settings: ToolSettings,
    pub objects: Vec<ObjectData>,
    /// PNG-encoded committed buffer, so strokes survive a round trip.
    #[serde(default)]
    pub committed_png: Vec<u8>,
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Serialized placed object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectData {
    pub id: u64,
    pub kind: ObjectKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub font_size: f64,
    #[serde(default)]
    pub color: Rgb8,
    /// PNG-encoded source raster for image objects.
    #[serde(default)]
    pub image_png: Vec<u8>,
}

impl SketchFile {
    /// Creates an empty document with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: SketchMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            settings: ToolSettings::default(),
            objects: Vec::new(),
            committed_png: Vec::new(),
        }
    }

    /// Saves the document as JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize sketch")?;
        std::fs::write(path.as_ref(), json).context("Failed to write sketch file")?;
        Ok(())
    }

    /// Loads a document from JSON, refreshing the modified timestamp.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read sketch file")?;
        let mut sketch: SketchFile =
            serde_json::from_str(&content).context("Failed to parse sketch file")?;
        sketch.metadata.modified = Utc::now();
        Ok(sketch)
    }

    /// Converts a live object into its serialized form.
    pub fn from_object(object: &SketchObject) -> Result<ObjectData> {
        Ok(match object {
            SketchObject::Text(t) => ObjectData {
                id: t.id,
                kind: ObjectKind::Text,
                x: t.x,
                y: t.y,
                width: 0.0,
                height: 0.0,
                text_content: t.content.clone(),
                font_size: t.font_size,
                color: t.color,
                image_png: Vec::new(),
            },
            SketchObject::Image(i) => ObjectData {
                id: i.id,
                kind: ObjectKind::Image,
                x: i.x,
                y: i.y,
                width: i.width,
                height: i.height,
                text_content: String::new(),
                font_size: 0.0,
                color: Rgb8::default(),
                image_png: i
                    .pixmap
                    .encode_png()
                    .context("Failed to encode image object")?,
            },
        })
    }

    /// Reconstructs a live object, preserving its id.
    pub fn to_object(data: &ObjectData) -> Result<SketchObject> {
        Ok(match data.kind {
            ObjectKind::Text => SketchObject::Text(TextObject::new(
                data.id,
                data.text_content.clone(),
                data.x,
                data.y,
                data.font_size,
                data.color,
            )),
            ObjectKind::Image => {
                let pixmap = Pixmap::decode_png(&data.image_png)
                    .context("Failed to decode image object")?;
                SketchObject::Image(ImageObject::new(
                    data.id,
                    pixmap,
                    data.x,
                    data.y,
                    data.width,
                    data.height,
                ))
            }
        })
    }
}
