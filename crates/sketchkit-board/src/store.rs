//! Ordered collection of placed objects.
//!
//! Insertion order is the paint order (later objects draw on top), and that
//! order is what history snapshots preserve. Ids are issued by a monotonic
//! per-session counter and are never reused, not even across `clear()`.

use sketchkit_core::{ObjectError, Rgb8};
use tiny_skia::Pixmap;
use tracing::debug;

use crate::model::{ImageObject, SketchObject, TextObject};

/// Owning store for every placed object on the board.
///
/// Degenerate objects (empty text, non-positive image extents) are rejected
/// at this boundary with an [`ObjectError`]; callers at the UI edge swallow
/// the error rather than surfacing it.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects: Vec<SketchObject>,
    next_id: u64,
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The next id this store would issue.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Sets the next id to be issued. Used when loading a document so ids
    /// continue above the highest loaded one, and when restoring a history
    /// snapshot so the live counter is never rolled back.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = self.next_id.max(id);
    }

    /// Appends a text object at the given baseline anchor.
    pub fn add_text(
        &mut self,
        content: &str,
        x: f64,
        y: f64,
        font_size: f64,
        color: Rgb8,
    ) -> Result<u64, ObjectError> {
        if content.trim().is_empty() {
            return Err(ObjectError::EmptyText);
        }
        let id = self.generate_id();
        self.objects
            .push(SketchObject::Text(TextObject::new(
                id, content, x, y, font_size, color,
            )));
        Ok(id)
    }

    /// Appends an image object with the given display extent.
    pub fn add_image(
        &mut self,
        pixmap: Pixmap,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<u64, ObjectError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ObjectError::NonPositiveDimensions { width, height });
        }
        let id = self.generate_id();
        self.objects
            .push(SketchObject::Image(ImageObject::new(
                id, pixmap, x, y, width, height,
            )));
        Ok(id)
    }

    /// Re-inserts a fully formed object, e.g. when loading a document.
    /// Bumps the id counter above the object's id so issuance never collides.
    pub fn restore(&mut self, object: SketchObject) {
        self.set_next_id(object.id() + 1);
        self.objects.push(object);
    }

    /// Removes an object by id. Removal is idempotent: an absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: u64) -> Option<SketchObject> {
        match self.objects.iter().position(|o| o.id() == id) {
            Some(idx) => Some(self.objects.remove(idx)),
            None => {
                debug!("remove({id}): no such object, ignoring");
                None
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<&SketchObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut SketchObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Objects in insertion (= paint) order. Reverse this for topmost-first
    /// hit testing.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SketchObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.objects.iter().any(|o| o.id() == id)
    }

    /// Removes every object. The id counter is preserved so ids are not
    /// reused within the session.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
