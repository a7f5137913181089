//! The sketch board engine.
//!
//! One `SketchEngine` is constructed per editing session and owns every
//! piece of board state: the object store, selection, history, both raster
//! buffers, the tool settings, and the current pointer gesture. All state
//! transitions happen synchronously on the host's pointer callbacks; there
//! is no background processing and nothing suspends. The host tears the
//! session down by dropping the engine; no state survives that.

use anyhow::Context;
use chrono::Utc;
use sketchkit_core::{DecodeError, Point, Rgb8, Result};
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;
use tracing::{debug, info};

use crate::controller::GestureState;
use crate::history::{HistoryManager, Snapshot, DEFAULT_MAX_DEPTH};
use crate::model::{pixmap_from_rgba, SketchObject};
use crate::selection::SelectionManager;
use crate::serialization::SketchFile;
use crate::settings::ToolSettings;
use crate::store::ObjectStore;
use crate::surface::CanvasSurface;
use crate::tools::Tool;
use crate::{export, font_manager};

/// Smallest width/height an image can be resized to, in canvas units.
pub const MIN_OBJECT_DIMENSION: f64 = 20.0;
/// Smallest font size text can be resized to.
pub const MIN_FONT_SIZE: f64 = 12.0;
/// Where newly inserted images land.
const IMAGE_INSERT_POS: (f64, f64) = (100.0, 100.0);
/// Default maximum width applied to inserted images.
pub const DEFAULT_IMAGE_MAX_WIDTH: f64 = 400.0;

/// A complete editing session.
pub struct SketchEngine {
    store: ObjectStore,
    selection: SelectionManager,
    history: HistoryManager,
    surface: CanvasSurface,
    settings: ToolSettings,
    gesture: GestureState,
}

impl SketchEngine {
    /// Creates a session with empty buffers of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            store: ObjectStore::new(),
            selection: SelectionManager::new(),
            history: HistoryManager::new(DEFAULT_MAX_DEPTH),
            surface: CanvasSurface::new(width, height)?,
            settings: ToolSettings::default(),
            gesture: GestureState::Idle,
        })
    }

    // --- pointer dispatch ---

    /// Classifies intent and begins a gesture.
    pub fn pointer_down(&mut self, point: Point) {
        if self.gesture.awaiting_text() {
            // A text request is outstanding; pointer handling is suspended.
            return;
        }
        match self.settings.tool {
            Tool::Select => {
                // The handle of the already-selected object takes priority
                // over re-selection or drag-start.
                if self.selection.is_on_resize_handle(&self.store, point) {
                    if let Some(id) = self.selection.selected_id() {
                        self.gesture = GestureState::Resizing { id, last: point };
                        return;
                    }
                }
                match self.selection.pick(&self.store, point) {
                    Some(id) => {
                        if let Some(object) = self.store.get(id) {
                            let bounds = object.bounds();
                            self.gesture = GestureState::Dragging {
                                id,
                                grab_offset: Point::new(point.x - bounds.x, point.y - bounds.y),
                            };
                        }
                        self.sync_overlay();
                    }
                    None => {
                        // Empty space: selection cleared, chrome removed.
                        self.sync_overlay();
                    }
                }
            }
            Tool::Text => {
                self.gesture = GestureState::AwaitingTextInput { anchor: point };
            }
            tool => {
                if let Some(stroke) = tool.stroke_kind() {
                    self.gesture = GestureState::Drawing {
                        stroke,
                        last: point,
                    };
                } else if let Some(kind) = tool.shape_kind() {
                    self.gesture = GestureState::PreviewingShape {
                        kind,
                        anchor: point,
                    };
                }
            }
        }
    }

    /// Advances the active gesture.
    pub fn pointer_move(&mut self, point: Point) {
        match self.gesture {
            GestureState::Drawing { stroke, last } => {
                match stroke {
                    crate::tools::StrokeKind::Pen => self.surface.stroke_segment(
                        last,
                        point,
                        self.settings.color,
                        self.settings.line_width,
                    ),
                    crate::tools::StrokeKind::Eraser => {
                        self.surface
                            .erase_segment(last, point, self.settings.line_width)
                    }
                }
                self.gesture = GestureState::Drawing {
                    stroke,
                    last: point,
                };
            }
            GestureState::PreviewingShape { kind, anchor } => {
                self.surface.preview_shape(
                    kind,
                    anchor,
                    point,
                    self.settings.color,
                    self.settings.line_width,
                );
            }
            GestureState::Dragging { id, grab_offset } => {
                if let Some(object) = self.store.get_mut(id) {
                    object.set_bounds_origin(point.x - grab_offset.x, point.y - grab_offset.y);
                }
                self.surface.repaint(&self.store);
                self.sync_overlay();
            }
            GestureState::Resizing { id, last } => {
                if let Some(object) = self.store.get_mut(id) {
                    match object {
                        SketchObject::Image(image) => {
                            image.width = (point.x - image.x).max(MIN_OBJECT_DIMENSION);
                            image.height = (point.y - image.y).max(MIN_OBJECT_DIMENSION);
                        }
                        SketchObject::Text(text) => {
                            text.font_size =
                                (text.font_size + (point.y - last.y)).max(MIN_FONT_SIZE);
                        }
                    }
                }
                self.gesture = GestureState::Resizing { id, last: point };
                self.surface.repaint(&self.store);
                self.sync_overlay();
            }
            GestureState::Idle | GestureState::AwaitingTextInput { .. } => {}
        }
    }

    /// Finalizes the active gesture. Every terminal pointer-up that mutated
    /// persisted state pushes a history snapshot.
    pub fn pointer_up(&mut self, point: Point) {
        match self.gesture {
            GestureState::Idle => {}
            GestureState::AwaitingTextInput { .. } => {
                // Resolved via confirm_text/cancel_text, not the pointer.
            }
            GestureState::Drawing { .. } => {
                self.gesture = GestureState::Idle;
                self.push_snapshot();
            }
            GestureState::PreviewingShape { kind, anchor } => {
                self.surface.commit_shape(
                    kind,
                    anchor,
                    point,
                    self.settings.color,
                    self.settings.line_width,
                );
                self.sync_overlay();
                self.gesture = GestureState::Idle;
                self.push_snapshot();
            }
            GestureState::Dragging { .. } | GestureState::Resizing { .. } => {
                self.gesture = GestureState::Idle;
                self.push_snapshot();
            }
        }
    }

    /// Treats the pointer leaving the canvas as a pointer-up so no gesture
    /// is ever left stuck.
    pub fn pointer_leave(&mut self, point: Point) {
        self.pointer_up(point);
    }

    // --- text insertion ---

    /// Resolves an outstanding text request with the entered content.
    ///
    /// Empty or whitespace-only content is rejected at this boundary: no
    /// object, no snapshot, state returns to idle. Returns whether a text
    /// object was added.
    pub fn confirm_text(&mut self, content: &str, font_size: f64) -> bool {
        let GestureState::AwaitingTextInput { anchor } = self.gesture else {
            debug!("confirm_text with no outstanding text request, ignoring");
            return false;
        };
        self.gesture = GestureState::Idle;

        match self
            .store
            .add_text(content, anchor.x, anchor.y, font_size, self.settings.color)
        {
            Ok(id) => {
                debug!("added text object {id} at ({}, {})", anchor.x, anchor.y);
                self.surface.repaint(&self.store);
                self.sync_overlay();
                self.push_snapshot();
                true
            }
            Err(err) => {
                debug!("text rejected: {err}");
                false
            }
        }
    }

    /// Abandons an outstanding text request without mutating anything.
    pub fn cancel_text(&mut self) {
        if self.gesture.awaiting_text() {
            self.gesture = GestureState::Idle;
        }
    }

    // --- object insertion / deletion ---

    /// Decodes image bytes and inserts the result as an image object,
    /// downsized proportionally to `max_width` if wider.
    ///
    /// Decode failure is surfaced to the caller and nothing is mutated.
    pub fn insert_image(&mut self, bytes: &[u8], max_width: f64) -> Result<u64> {
        let decoded = image::load_from_memory(bytes).map_err(|e| DecodeError::Malformed {
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (w, h) = rgba.dimensions();
        let scale = (max_width / w as f64).min(1.0);
        let rgba = if scale < 1.0 {
            let nw = ((w as f64 * scale).round().max(1.0)) as u32;
            let nh = ((h as f64 * scale).round().max(1.0)) as u32;
            image::imageops::resize(&rgba, nw, nh, image::imageops::FilterType::Triangle)
        } else {
            rgba
        };
        let pixmap = pixmap_from_rgba(&rgba)?;
        self.insert_image_raster(pixmap, max_width)
    }

    /// Inserts an already-decoded raster, scaling its display extent down
    /// proportionally to fit `max_width`.
    pub fn insert_image_raster(&mut self, pixmap: Pixmap, max_width: f64) -> Result<u64> {
        let scale = (max_width / pixmap.width() as f64).min(1.0);
        let width = pixmap.width() as f64 * scale;
        let height = pixmap.height() as f64 * scale;
        let (x, y) = IMAGE_INSERT_POS;
        let id = self.store.add_image(pixmap, x, y, width, height)?;
        self.surface.repaint(&self.store);
        self.sync_overlay();
        self.push_snapshot();
        Ok(id)
    }

    /// Removes the selected object, clearing the selection in the same
    /// transaction. Returns whether anything was deleted.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        self.store.remove(id);
        self.selection.clear();
        self.surface.repaint(&self.store);
        self.sync_overlay();
        self.push_snapshot();
        true
    }

    // --- history ---

    /// Reverts the most recent committed action. Returns whether anything
    /// changed; an empty history is a silent no-op.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Err(err) => {
                debug!("undo: {err}");
                false
            }
            Ok(None) => {
                self.store.clear();
                self.selection.clear();
                self.surface.clear_all();
                true
            }
            Ok(Some(snapshot)) => {
                self.apply_snapshot(snapshot);
                true
            }
        }
    }

    /// Re-applies the most recently undone action.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Err(err) => {
                debug!("redo: {err}");
                false
            }
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        // The id counter only ever moves forward; a restored snapshot must
        // not roll it back and re-issue ids already used this session.
        let next_id = self.store.next_id();
        self.store = snapshot.objects;
        self.store.set_next_id(next_id);
        self.surface.restore_committed(snapshot.committed);
        self.selection.validate(&self.store);
        self.sync_overlay();
    }

    fn push_snapshot(&mut self) {
        self.history.record(Snapshot::new(
            self.store.clone(),
            self.surface.snapshot_committed(),
        ));
    }

    /// Non-undoable full reset: objects, buffers, selection, and history.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
        self.history.clear();
        self.surface.clear_all();
        self.gesture = GestureState::Idle;
    }

    // --- settings ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.settings.tool = tool;
    }

    /// Sets the tool from its wire name, falling back to the default tool
    /// (with a warning) on anything unrecognized.
    pub fn set_tool_by_name(&mut self, name: &str) {
        self.settings.tool = Tool::from_name(name);
    }

    pub fn set_color(&mut self, color: Rgb8) {
        self.settings.color = color;
    }

    pub fn set_line_width(&mut self, width: f64) {
        debug_assert!(
            width.is_finite() && width > 0.0,
            "line_width must be positive and finite, got {width}"
        );
        self.settings.line_width = width;
    }

    pub fn set_font_size(&mut self, size: f64) {
        debug_assert!(
            size.is_finite() && size > 0.0,
            "font_size must be positive and finite, got {size}"
        );
        self.settings.font_size = size;
    }

    // --- persistence ---

    /// Exports the committed buffer (never the overlay) as a PNG named
    /// `sketch-YYYY-MM-DD.png` into `dir`. Returns the written path.
    pub fn export_png(&self, dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let path = dir
            .as_ref()
            .join(export::export_filename(Utc::now().date_naive()));
        export::write_committed_png(&self.surface, &path)?;
        info!("exported sketch to {}", path.display());
        Ok(path)
    }

    /// Saves the full document (settings, objects, committed raster).
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let name = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        let mut file = SketchFile::new(name);
        file.settings = self.settings.clone();
        for object in self.store.iter() {
            file.objects.push(SketchFile::from_object(object)?);
        }
        file.committed_png = self
            .surface
            .snapshot_committed()
            .encode_png()
            .context("Failed to encode committed buffer")?;
        file.save_to_file(path)
    }

    /// Loads a document, replacing the store, settings, and committed
    /// buffer. History and selection are cleared; id issuance continues
    /// above the highest loaded id.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = SketchFile::load_from_file(path)?;
        file.settings.validate()?;

        let mut store = ObjectStore::new();
        for data in &file.objects {
            store.restore(SketchFile::to_object(data)?);
        }

        self.store = store;
        self.settings = file.settings;
        self.selection.clear();
        self.history.clear();
        self.gesture = GestureState::Idle;

        if file.committed_png.is_empty() {
            self.surface.repaint(&self.store);
        } else {
            let pixmap = Pixmap::decode_png(&file.committed_png)
                .context("Failed to decode committed buffer")?;
            self.surface.restore_committed(pixmap);
        }
        self.sync_overlay();
        Ok(())
    }

    // --- accessors ---

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Measures text the way the board will paint it. Exposed so hosts can
    /// size their text modal preview consistently.
    pub fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        font_manager::measure_width(text, font_size)
    }

    /// Redraws the selection chrome on the overlay, or clears the overlay
    /// when nothing is selected.
    fn sync_overlay(&mut self) {
        match self.selection.selected_bounds(&self.store) {
            Some(bounds) => self.surface.draw_selection_chrome(bounds),
            None => self.surface.clear_overlay(),
        }
    }
}
