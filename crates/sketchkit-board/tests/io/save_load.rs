use sketchkit_board::{SketchEngine, SketchObject, Tool};
use sketchkit_core::{Point, Rgb8};
use tiny_skia::Pixmap;

fn opaque_pixmap(w: u32, h: u32) -> Pixmap {
    let mut pm = Pixmap::new(w, h).unwrap();
    pm.fill(tiny_skia::Color::from_rgba8(40, 80, 120, 255));
    pm
}

#[test]
fn save_and_load_round_trips_objects_settings_and_strokes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.sketch");

    let mut engine = SketchEngine::new(200, 200).unwrap();
    engine.set_color(Rgb8::new(0, 128, 0));
    engine.set_line_width(5.0);

    engine.set_tool(Tool::Pen);
    engine.pointer_down(Point::new(10.0, 10.0));
    engine.pointer_move(Point::new(150.0, 150.0));
    engine.pointer_up(Point::new(150.0, 150.0));

    engine.set_tool(Tool::Text);
    engine.pointer_down(Point::new(20.0, 60.0));
    assert!(engine.confirm_text("saved", 24.0));

    engine
        .insert_image_raster(opaque_pixmap(30, 20), 400.0)
        .unwrap();

    engine.save_to_file(&path).expect("save");

    let mut loaded = SketchEngine::new(200, 200).unwrap();
    loaded.load_from_file(&path).expect("load");

    assert_eq!(loaded.store().len(), 2);
    assert_eq!(loaded.settings().color, Rgb8::new(0, 128, 0));
    assert_eq!(loaded.settings().line_width, 5.0);
    // The committed raster (including the direct stroke) survived.
    assert!(loaded.surface().committed().data().iter().any(|&b| b != 0));
    // History is session-local.
    assert!(!loaded.history().can_undo());
    assert_eq!(loaded.selection().selected_id(), None);
}

#[test]
fn loaded_ids_are_preserved_and_issuance_continues_above_them() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ids.sketch");

    let mut engine = SketchEngine::new(100, 100).unwrap();
    engine.set_tool(Tool::Text);
    engine.pointer_down(Point::new(10.0, 30.0));
    engine.confirm_text("first", 24.0);
    engine.pointer_down(Point::new(10.0, 70.0));
    engine.confirm_text("second", 24.0);
    let saved_ids: Vec<u64> = engine.store().iter().map(|o| o.id()).collect();

    engine.save_to_file(&path).expect("save");

    let mut loaded = SketchEngine::new(100, 100).unwrap();
    loaded.load_from_file(&path).expect("load");
    let loaded_ids: Vec<u64> = loaded.store().iter().map(|o| o.id()).collect();
    assert_eq!(saved_ids, loaded_ids);

    loaded.set_tool(Tool::Text);
    loaded.pointer_down(Point::new(10.0, 90.0));
    loaded.confirm_text("third", 24.0);
    let new_id = loaded.store().iter().last().unwrap().id();
    assert!(new_id > *saved_ids.iter().max().unwrap());
}

#[test]
fn image_objects_round_trip_with_their_extents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("image.sketch");

    let mut engine = SketchEngine::new(100, 100).unwrap();
    engine
        .insert_image_raster(opaque_pixmap(100, 50), 50.0)
        .unwrap();
    engine.save_to_file(&path).expect("save");

    let mut loaded = SketchEngine::new(100, 100).unwrap();
    loaded.load_from_file(&path).expect("load");

    match loaded.store().iter().next() {
        Some(SketchObject::Image(img)) => {
            assert_eq!((img.width, img.height), (50.0, 25.0));
            assert_eq!((img.pixmap.width(), img.pixmap.height()), (100, 50));
        }
        _ => panic!("expected image object"),
    };
}

#[test]
fn loading_garbage_fails_without_mutating_the_engine() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.sketch");
    std::fs::write(&path, "not json").unwrap();

    let mut engine = SketchEngine::new(100, 100).unwrap();
    engine.set_tool(Tool::Text);
    engine.pointer_down(Point::new(10.0, 30.0));
    engine.confirm_text("survivor", 24.0);

    assert!(engine.load_from_file(&path).is_err());
    assert_eq!(engine.store().len(), 1);
}
