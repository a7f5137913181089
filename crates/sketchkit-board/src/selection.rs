//! Selection state and hit testing.

use sketchkit_core::{Bounds, Point};

use crate::store::ObjectStore;

/// Tracks the single selected object and drives hit testing against the
/// store.
///
/// # Selection Model
///
/// - At most one object is selected at a time.
/// - The selection references an id, never an object copy; if the id is
///   deleted the selection must be cleared in the same transaction.
/// - Picking iterates the store in reverse paint order so overlapping
///   objects resolve to the visually topmost one.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the id of the selected object, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn set_selected_id(&mut self, id: Option<u64>) {
        self.selected_id = id;
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Selects the topmost object whose bounds contain `point`.
    ///
    /// Iterates in reverse paint order (last inserted first) and selects the
    /// first hit; clicking empty space clears the selection.
    ///
    /// # Returns
    ///
    /// The id of the newly selected object, or `None` when the click landed
    /// on empty space.
    pub fn pick(&mut self, store: &ObjectStore, point: Point) -> Option<u64> {
        self.selected_id = store
            .iter()
            .rev()
            .find(|o| o.contains_point(point))
            .map(|o| o.id());
        self.selected_id
    }

    /// True when `point` lies on the resize handle of the currently selected
    /// object.
    ///
    /// Only meaningful while something is selected. Callers check this
    /// before [`pick`](Self::pick) on pointer-down so the handle takes
    /// priority over re-selection or drag-start.
    pub fn is_on_resize_handle(&self, store: &ObjectStore, point: Point) -> bool {
        self.selected_bounds(store)
            .map(|b| b.handle_rect().contains(point))
            .unwrap_or(false)
    }

    /// Bounds of the selected object, or `None` when nothing is selected or
    /// the id has gone stale.
    pub fn selected_bounds(&self, store: &ObjectStore) -> Option<Bounds> {
        self.selected_id
            .and_then(|id| store.get(id))
            .map(|o| o.bounds())
    }

    /// Drops the selection if the selected id no longer exists in the store.
    pub fn validate(&mut self, store: &ObjectStore) {
        if let Some(id) = self.selected_id {
            if !store.contains(id) {
                self.selected_id = None;
            }
        }
    }
}
