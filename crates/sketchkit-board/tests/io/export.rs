use chrono::Utc;
use sketchkit_board::{SketchEngine, Tool};
use sketchkit_core::Point;

#[test]
fn export_writes_a_date_stamped_png_of_the_committed_buffer() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut engine = SketchEngine::new(64, 64).unwrap();
    engine.set_tool(Tool::FillRect);
    engine.pointer_down(Point::new(8.0, 8.0));
    engine.pointer_move(Point::new(40.0, 40.0));
    engine.pointer_up(Point::new(40.0, 40.0));

    let path = engine.export_png(dir.path()).expect("export");
    let expected_name = format!("sketch-{}.png", Utc::now().date_naive().format("%Y-%m-%d"));
    assert_eq!(path.file_name().unwrap().to_string_lossy(), expected_name);

    let decoded = image::open(&path).expect("decode exported png");
    assert_eq!((decoded.width(), decoded.height()), (64, 64));
}

#[test]
fn export_excludes_the_overlay() {
    let dir = tempfile::tempdir().expect("tempdir");

    // Leave a shape preview on the overlay by not releasing the pointer.
    let mut engine = SketchEngine::new(32, 32).unwrap();
    engine.set_tool(Tool::FillRect);
    engine.pointer_down(Point::new(2.0, 2.0));
    engine.pointer_move(Point::new(30.0, 30.0));

    let path = engine.export_png(dir.path()).expect("export");
    let decoded = image::open(&path).expect("decode").to_rgba8();
    assert!(decoded.pixels().all(|p| p.0[3] == 0));
}
