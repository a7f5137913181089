use sketchkit_board::{Tool, ToolSettings};
use sketchkit_core::Rgb8;

#[test]
fn settings_round_trip_through_json_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");

    let settings = ToolSettings {
        tool: Tool::FillCircle,
        color: Rgb8::new(18, 52, 86),
        line_width: 7.5,
        font_size: 36.0,
    };
    settings.save_to_file(&path).expect("save");

    let loaded = ToolSettings::load_from_file(&path).expect("load");
    assert_eq!(loaded, settings);
}

#[test]
fn loading_rejects_invalid_numeric_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r##"{"tool":"pen","color":"#000000","line_width":-2.0,"font_size":24.0}"##,
    )
    .unwrap();

    assert!(ToolSettings::load_from_file(&path).is_err());
}

#[test]
fn loading_rejects_unknown_tool_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("unknown.json");
    std::fs::write(
        &path,
        r##"{"tool":"lasso","color":"#000000","line_width":3.0,"font_size":24.0}"##,
    )
    .unwrap();

    assert!(ToolSettings::load_from_file(&path).is_err());
}
