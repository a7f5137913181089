//! System font lookup and text measurement.
//!
//! Loads one sans-serif face from the system font database and caches it for
//! the lifetime of the process. Text bounds and glyph rendering both go
//! through this module so that measurement and painting agree.
//!
//! When no system font can be found (bare containers, stripped CI images),
//! measurement falls back to a deterministic per-character approximation so
//! hit-testing and repaint-after-undo stay reproducible; rendering then skips
//! glyphs and logs a warning once.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{Font, Scale};
use std::sync::OnceLock;
use tracing::warn;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// The cached sans-serif face, if the system has one.
pub fn default_font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| {
        let font = load_sans_serif();
        if font.is_none() {
            warn!("No system sans-serif font found; text will be measured approximately and not rendered");
        }
        font
    })
    .as_ref()
}

fn load_sans_serif() -> Option<Font<'static>> {
    let query = Query {
        families: &[Family::SansSerif],
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = std::fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = std::fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
    }
}

/// Measures the advance width of `text` at `font_size` pixels.
///
/// With a font available this is the summed glyph advances of a rusttype
/// layout. Without one it is `0.5 * font_size` per character, which keeps
/// bounds deterministic within a session.
pub fn measure_width(text: &str, font_size: f64) -> f64 {
    match default_font() {
        Some(font) => {
            let scale = Scale::uniform(font_size as f32);
            let start = rusttype::point(0.0, 0.0);
            font.layout(text, scale, start)
                .map(|g| g.unpositioned().h_metrics().advance_width)
                .sum::<f32>() as f64
        }
        None => text.chars().count() as f64 * font_size * 0.5,
    }
}
