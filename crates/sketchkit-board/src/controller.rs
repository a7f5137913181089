//! The pointer-gesture state machine.

use sketchkit_core::Point;

use crate::tools::{ShapeKind, StrokeKind};

/// State of the current pointer gesture.
///
/// Each variant carries the payload the gesture needs, so transitions are a
/// plain exhaustive match rather than a set of free-floating flags. The
/// state lives only for the duration of one gesture and is cleared
/// unconditionally on pointer-up (or pointer-leave, which finalizes the
/// gesture the same way so nothing is ever left stuck).
///
/// Transitions on pointer-down, by active tool:
///
/// - `select`: handle hit on the current selection goes to [`Resizing`];
///   otherwise a pick hit goes to [`Dragging`] with the pointer-to-origin
///   offset; empty space clears the selection and stays [`Idle`].
/// - `pen`/`eraser`: [`Drawing`]; moves append segments directly to the
///   committed buffer.
/// - shape tools: [`PreviewingShape`] anchored at the down point; moves
///   redraw the overlay only; release commits into the committed buffer.
/// - `text`: [`AwaitingTextInput`]; pointer handling is suspended until the
///   host confirms or cancels the text request.
///
/// [`Drawing`]: GestureState::Drawing
/// [`PreviewingShape`]: GestureState::PreviewingShape
/// [`Dragging`]: GestureState::Dragging
/// [`Resizing`]: GestureState::Resizing
/// [`AwaitingTextInput`]: GestureState::AwaitingTextInput
/// [`Idle`]: GestureState::Idle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A freehand stroke; `last` is the previous sample point.
    Drawing { stroke: StrokeKind, last: Point },
    /// A live two-point shape preview anchored at the down point.
    PreviewingShape { kind: ShapeKind, anchor: Point },
    /// Moving the selected object; `grab_offset` is pointer minus bounds
    /// origin at grab time.
    Dragging { id: u64, grab_offset: Point },
    /// Resizing via the corner handle; `last` is the previous sample point
    /// (text resizing is driven by the vertical delta between samples).
    Resizing { id: u64, last: Point },
    /// A text-insertion request is outstanding at `anchor`.
    AwaitingTextInput { anchor: Point },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Whether the engine is waiting on the host's text modal.
    pub fn awaiting_text(&self) -> bool {
        matches!(self, GestureState::AwaitingTextInput { .. })
    }
}
