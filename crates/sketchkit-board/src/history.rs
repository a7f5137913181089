//! Snapshot-based undo/redo.
//!
//! Every completed user action (stroke finished, shape committed, text
//! added, image inserted, drag or resize released, deletion) pushes one
//! immutable snapshot of the whole board state. Undo pops the top and
//! restores the snapshot beneath it; redo uses the standard two-stack
//! discipline, and any new recording invalidates the redo stack.

use sketchkit_core::HistoryError;
use tiny_skia::Pixmap;
use tracing::debug;

use crate::store::ObjectStore;

/// Default undo depth before the oldest entries are evicted.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// An immutable deep copy of board state at the end of one user action.
///
/// Owns its own `ObjectStore` and committed raster; later mutation of the
/// live board cannot corrupt it.
#[derive(Clone)]
pub struct Snapshot {
    pub objects: ObjectStore,
    pub committed: Pixmap,
}

impl Snapshot {
    pub fn new(objects: ObjectStore, committed: Pixmap) -> Self {
        Self { objects, committed }
    }
}

/// Linear undo/redo stacks over [`Snapshot`]s.
///
/// The undo stack holds the state *after* each committed action, so undoing
/// pops the most recent entry and applies the one now on top. Popping the
/// only entry means reverting the very first action: there is no snapshot
/// "zero", the board resets to empty instead.
pub struct HistoryManager {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl HistoryManager {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Pushes a snapshot of a just-completed action.
    ///
    /// Clears the redo stack and evicts the oldest entry when the stack is
    /// at capacity.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.redo_stack.clear();
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snapshot);
    }

    /// Reverts the most recent action.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))`: apply this snapshot (the state before the
    ///   undone action).
    /// - `Ok(None)`: the undone action was the first one; reset the board to
    ///   an empty store and a cleared committed buffer.
    /// - `Err(NothingToUndo)`: nothing recorded; callers treat this as a
    ///   no-op frame.
    pub fn undo(&mut self) -> Result<Option<Snapshot>, HistoryError> {
        let popped = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        self.redo_stack.push(popped);
        match self.undo_stack.last() {
            Some(prev) => Ok(Some(prev.clone())),
            None => {
                debug!("undo reached the initial state, resetting to empty");
                Ok(None)
            }
        }
    }

    /// Re-applies the most recently undone action.
    pub fn redo(&mut self) -> Result<Snapshot, HistoryError> {
        let snapshot = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        self.undo_stack.push(snapshot.clone());
        Ok(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
