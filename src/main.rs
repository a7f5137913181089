use sketchkit::{init_logging, SketchEngine, Tool, BUILD_DATE, VERSION};
use sketchkit_core::Point;
use tracing::info;

/// Canvas size for the demo session.
const CANVAS_WIDTH: u32 = 2000;
const CANVAS_HEIGHT: u32 = 2000;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    info!("SketchKit {} (built {})", VERSION, BUILD_DATE);

    let mut engine = SketchEngine::new(CANVAS_WIDTH, CANVAS_HEIGHT)?;

    // Freehand pen stroke.
    engine.set_tool(Tool::Pen);
    engine.pointer_down(Point::new(100.0, 100.0));
    for i in 1..=40 {
        let t = i as f64 / 40.0;
        engine.pointer_move(Point::new(
            100.0 + t * 300.0,
            100.0 + (t * std::f64::consts::TAU).sin() * 60.0,
        ));
    }
    engine.pointer_up(Point::new(400.0, 100.0));

    // A couple of shapes.
    engine.set_tool(Tool::Rect);
    engine.pointer_down(Point::new(500.0, 80.0));
    engine.pointer_move(Point::new(720.0, 220.0));
    engine.pointer_up(Point::new(720.0, 220.0));

    engine.set_tool(Tool::FillCircle);
    engine.set_color(sketchkit_core::Rgb8::new(0xcc, 0x33, 0x33));
    engine.pointer_down(Point::new(850.0, 150.0));
    engine.pointer_move(Point::new(910.0, 150.0));
    engine.pointer_up(Point::new(910.0, 150.0));

    engine.set_tool(Tool::Arrow);
    engine.pointer_down(Point::new(400.0, 300.0));
    engine.pointer_move(Point::new(600.0, 400.0));
    engine.pointer_up(Point::new(600.0, 400.0));

    // Text annotation placed via the text tool.
    engine.set_tool(Tool::Text);
    engine.set_color(sketchkit_core::Rgb8::new(0x00, 0x00, 0x00));
    engine.pointer_down(Point::new(120.0, 500.0));
    engine.pointer_up(Point::new(120.0, 500.0));
    engine.confirm_text("SketchKit demo", 32.0);

    // Demonstrate undo of the last action.
    engine.set_tool(Tool::Line);
    engine.pointer_down(Point::new(100.0, 600.0));
    engine.pointer_move(Point::new(500.0, 600.0));
    engine.pointer_up(Point::new(500.0, 600.0));
    if engine.undo() {
        info!("Undid the last line");
    }

    let out_dir = std::env::current_dir()?;
    let path = engine.export_png(&out_dir)?;
    info!("Exported demo sketch to {}", path.display());

    Ok(())
}
