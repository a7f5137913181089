use sketchkit_board::{SketchEngine, SketchObject, Tool};
use sketchkit_core::Point;

fn engine() -> SketchEngine {
    SketchEngine::new(300, 300).expect("surface")
}

fn has_ink(pixmap: &tiny_skia::Pixmap) -> bool {
    pixmap.data().iter().any(|&b| b != 0)
}

fn add_text(engine: &mut SketchEngine, content: &str, x: f64, y: f64) {
    engine.set_tool(Tool::Text);
    engine.pointer_down(Point::new(x, y));
    assert!(engine.confirm_text(content, 24.0));
}

#[test]
fn undo_is_strict_lifo() {
    let mut engine = engine();
    add_text(&mut engine, "one", 10.0, 30.0);
    add_text(&mut engine, "two", 10.0, 70.0);
    add_text(&mut engine, "three", 10.0, 110.0);
    assert_eq!(engine.history().undo_depth(), 3);

    assert!(engine.undo());
    assert!(engine.undo());

    // State must be exactly as it was after the first action.
    assert_eq!(engine.store().len(), 1);
    match engine.store().iter().next() {
        Some(SketchObject::Text(t)) => {
            assert_eq!(t.content, "one");
            assert_eq!((t.x, t.y), (10.0, 30.0));
        }
        _ => panic!("expected the first text object"),
    };
}

#[test]
fn undo_of_first_action_resets_to_empty() {
    let mut engine = engine();
    engine.set_tool(Tool::Pen);
    engine.pointer_down(Point::new(10.0, 10.0));
    engine.pointer_move(Point::new(100.0, 100.0));
    engine.pointer_up(Point::new(100.0, 100.0));
    assert!(has_ink(engine.surface().committed()));

    assert!(engine.undo());
    assert!(engine.store().is_empty());
    assert!(!has_ink(engine.surface().committed()));
    assert!(engine.history().can_redo());
}

#[test]
fn undo_restores_the_committed_raster() {
    let mut engine = engine();
    engine.set_tool(Tool::Pen);
    engine.pointer_down(Point::new(10.0, 10.0));
    engine.pointer_move(Point::new(100.0, 100.0));
    engine.pointer_up(Point::new(100.0, 100.0));
    let after_stroke = engine.surface().committed().data().to_vec();

    engine.set_tool(Tool::FillRect);
    engine.pointer_down(Point::new(150.0, 150.0));
    engine.pointer_move(Point::new(250.0, 250.0));
    engine.pointer_up(Point::new(250.0, 250.0));
    assert_ne!(after_stroke, engine.surface().committed().data());

    assert!(engine.undo());
    assert_eq!(after_stroke, engine.surface().committed().data());
}

#[test]
fn redo_round_trips() {
    let mut engine = engine();
    add_text(&mut engine, "kept", 10.0, 30.0);
    add_text(&mut engine, "undone", 10.0, 70.0);

    assert!(engine.undo());
    assert_eq!(engine.store().len(), 1);
    assert!(engine.redo());
    assert_eq!(engine.store().len(), 2);
    assert!(!engine.history().can_redo());
}

#[test]
fn new_action_invalidates_redo() {
    let mut engine = engine();
    add_text(&mut engine, "a", 10.0, 30.0);
    add_text(&mut engine, "b", 10.0, 70.0);
    engine.undo();
    assert!(engine.history().can_redo());

    add_text(&mut engine, "c", 10.0, 110.0);
    assert!(!engine.history().can_redo());
    assert!(!engine.redo());
}

#[test]
fn undo_with_no_history_is_a_no_op() {
    let mut engine = engine();
    assert!(!engine.undo());
    assert!(!engine.redo());
    assert!(engine.store().is_empty());
}

#[test]
fn delete_clears_selection_in_the_same_transaction() {
    let mut engine = engine();
    add_text(&mut engine, "doomed", 50.0, 100.0);
    let id = engine.store().iter().next().unwrap().id();

    engine.set_tool(Tool::Select);
    engine.pointer_down(Point::new(55.0, 90.0));
    engine.pointer_up(Point::new(55.0, 90.0));
    assert_eq!(engine.selection().selected_id(), Some(id));
    let depth = engine.history().undo_depth();

    assert!(engine.delete_selected());
    assert!(engine.store().is_empty());
    assert_eq!(engine.selection().selected_id(), None);
    assert_eq!(engine.history().undo_depth(), depth + 1);

    // Idempotent: nothing selected anymore.
    assert!(!engine.delete_selected());
}

#[test]
fn undo_after_delete_brings_the_object_back() {
    let mut engine = engine();
    add_text(&mut engine, "phoenix", 50.0, 100.0);

    engine.set_tool(Tool::Select);
    engine.pointer_down(Point::new(55.0, 90.0));
    engine.pointer_up(Point::new(55.0, 90.0));
    engine.delete_selected();
    assert!(engine.store().is_empty());

    assert!(engine.undo());
    assert_eq!(engine.store().len(), 1);
}

#[test]
fn undo_clears_selection_when_the_id_vanishes() {
    let mut engine = engine();
    add_text(&mut engine, "base", 10.0, 30.0);
    add_text(&mut engine, "selected", 10.0, 100.0);
    let id = engine.store().iter().last().unwrap().id();

    engine.set_tool(Tool::Select);
    engine.pointer_down(Point::new(15.0, 90.0));
    engine.pointer_up(Point::new(15.0, 90.0));
    assert_eq!(engine.selection().selected_id(), Some(id));

    // Selecting pushed a snapshot; undo twice to drop past the object's
    // creation.
    engine.undo();
    engine.undo();
    assert!(!engine.store().contains(id));
    assert_eq!(engine.selection().selected_id(), None);
}

#[test]
fn undo_never_recycles_object_ids() {
    let mut engine = engine();
    add_text(&mut engine, "first", 10.0, 30.0);
    add_text(&mut engine, "second", 10.0, 70.0);
    let second_id = engine.store().iter().last().unwrap().id();

    assert!(engine.undo());
    add_text(&mut engine, "third", 10.0, 110.0);
    let third_id = engine.store().iter().last().unwrap().id();

    assert_ne!(second_id, third_id);
    assert!(third_id > second_id);
}

#[test]
fn clear_is_a_non_undoable_reset() {
    let mut engine = engine();
    add_text(&mut engine, "gone", 10.0, 30.0);
    engine.set_tool(Tool::Pen);
    engine.pointer_down(Point::new(10.0, 200.0));
    engine.pointer_move(Point::new(200.0, 200.0));
    engine.pointer_up(Point::new(200.0, 200.0));

    engine.clear();
    assert!(engine.store().is_empty());
    assert!(!has_ink(engine.surface().committed()));
    assert!(!has_ink(engine.surface().overlay()));
    assert!(!engine.history().can_undo());
    assert!(!engine.undo());
}
