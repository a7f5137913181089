//! The two raster targets: committed buffer and transient overlay.
//!
//! The committed buffer holds finalized pen/eraser strokes and committed
//! shapes, plus a full repaint of the object store whenever any object
//! changes. The overlay holds only transient content (live shape previews,
//! selection chrome) composited on top for presentation and never persisted.
//!
//! The repaint contract is "clear then redraw all objects in store order",
//! never incremental. A repaint triggered by an object mutation therefore
//! wipes earlier direct strokes from the committed buffer; they remain
//! recoverable through history snapshots.

use rusttype::{point as rt_point, Scale};
use sketchkit_core::{Bounds, Point, Rgb8, SurfaceError};
use tiny_skia::{
    BlendMode, Color, FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    StrokeDash, Transform,
};

use crate::font_manager;
use crate::model::{ImageObject, SketchObject, TextObject};
use crate::store::ObjectStore;
use crate::tools::ShapeKind;

/// Arrow head length in canvas units.
const ARROW_HEAD_LEN: f64 = 15.0;
/// Angle between the arrow shaft and each barb.
const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;

fn skia_color(c: Rgb8) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn selection_color() -> Color {
    // #0066ff, the selection chrome color.
    Color::from_rgba8(0, 102, 255, 255)
}

fn round_stroke(width: f64) -> Stroke {
    Stroke {
        width: width as f32,
        line_cap: LineCap::Round,
        ..Default::default()
    }
}

/// Builds the outline path for a two-point shape, or `None` when the
/// geometry is empty (e.g. a zero-radius circle).
fn shape_path(kind: ShapeKind, anchor: Point, current: Point) -> Option<Path> {
    let mut pb = PathBuilder::new();
    match kind {
        ShapeKind::Line => {
            pb.move_to(anchor.x as f32, anchor.y as f32);
            pb.line_to(current.x as f32, current.y as f32);
        }
        ShapeKind::Arrow => {
            let angle = (current.y - anchor.y).atan2(current.x - anchor.x);
            pb.move_to(anchor.x as f32, anchor.y as f32);
            pb.line_to(current.x as f32, current.y as f32);
            pb.line_to(
                (current.x - ARROW_HEAD_LEN * (angle - ARROW_HEAD_ANGLE).cos()) as f32,
                (current.y - ARROW_HEAD_LEN * (angle - ARROW_HEAD_ANGLE).sin()) as f32,
            );
            pb.move_to(current.x as f32, current.y as f32);
            pb.line_to(
                (current.x - ARROW_HEAD_LEN * (angle + ARROW_HEAD_ANGLE).cos()) as f32,
                (current.y - ARROW_HEAD_LEN * (angle + ARROW_HEAD_ANGLE).sin()) as f32,
            );
        }
        ShapeKind::Rect | ShapeKind::FillRect => {
            pb.move_to(anchor.x as f32, anchor.y as f32);
            pb.line_to(current.x as f32, anchor.y as f32);
            pb.line_to(current.x as f32, current.y as f32);
            pb.line_to(anchor.x as f32, current.y as f32);
            pb.close();
        }
        ShapeKind::Circle | ShapeKind::FillCircle => {
            let radius = anchor.distance_to(&current);
            return PathBuilder::from_circle(anchor.x as f32, anchor.y as f32, radius as f32);
        }
        ShapeKind::Triangle | ShapeKind::FillTriangle => {
            let mid_x = (anchor.x + current.x) / 2.0;
            pb.move_to(mid_x as f32, anchor.y as f32);
            pb.line_to(anchor.x as f32, current.y as f32);
            pb.line_to(current.x as f32, current.y as f32);
            pb.close();
        }
    }
    pb.finish()
}

/// Committed and overlay raster targets of identical size.
pub struct CanvasSurface {
    committed: Pixmap,
    overlay: Pixmap,
}

impl CanvasSurface {
    /// Creates both buffers, transparent. Fails on a zero-area size.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let make = || Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height });
        Ok(Self {
            committed: make()?,
            overlay: make()?,
        })
    }

    pub fn width(&self) -> u32 {
        self.committed.width()
    }

    pub fn height(&self) -> u32 {
        self.committed.height()
    }

    pub fn committed(&self) -> &Pixmap {
        &self.committed
    }

    pub fn overlay(&self) -> &Pixmap {
        &self.overlay
    }

    /// Appends one pen stroke segment directly into the committed buffer.
    pub fn stroke_segment(&mut self, from: Point, to: Point, color: Rgb8, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else { return };

        let mut paint = Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;
        self.committed
            .stroke_path(&path, &paint, &round_stroke(width), Transform::identity(), None);
    }

    /// Appends one eraser segment, clearing pixels destructively rather
    /// than painting over them.
    pub fn erase_segment(&mut self, from: Point, to: Point, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else { return };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.blend_mode = BlendMode::Clear;
        self.committed
            .stroke_path(&path, &paint, &round_stroke(width), Transform::identity(), None);
    }

    /// Commits a two-point shape into the committed buffer.
    pub fn commit_shape(
        &mut self,
        kind: ShapeKind,
        anchor: Point,
        current: Point,
        color: Rgb8,
        width: f64,
    ) {
        Self::draw_shape(&mut self.committed, kind, anchor, current, color, width);
    }

    /// Redraws a live shape preview, overlay only. The overlay is cleared
    /// first so previews never accumulate.
    pub fn preview_shape(
        &mut self,
        kind: ShapeKind,
        anchor: Point,
        current: Point,
        color: Rgb8,
        width: f64,
    ) {
        self.overlay.fill(Color::TRANSPARENT);
        Self::draw_shape(&mut self.overlay, kind, anchor, current, color, width);
    }

    fn draw_shape(
        target: &mut Pixmap,
        kind: ShapeKind,
        anchor: Point,
        current: Point,
        color: Rgb8,
        width: f64,
    ) {
        let Some(path) = shape_path(kind, anchor, current) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;

        if kind.is_filled() {
            target.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        } else {
            target.stroke_path(&path, &paint, &round_stroke(width), Transform::identity(), None);
        }
    }

    /// Draws selection chrome (dashed outline plus the corner resize
    /// handle) onto the overlay, clearing it first.
    pub fn draw_selection_chrome(&mut self, bounds: Bounds) {
        self.overlay.fill(Color::TRANSPARENT);

        let mut pb = PathBuilder::new();
        pb.move_to(bounds.x as f32, bounds.y as f32);
        pb.line_to(bounds.right() as f32, bounds.y as f32);
        pb.line_to(bounds.right() as f32, bounds.bottom() as f32);
        pb.line_to(bounds.x as f32, bounds.bottom() as f32);
        pb.close();

        let mut paint = Paint::default();
        paint.set_color(selection_color());
        paint.anti_alias = true;

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 2.0,
                dash: StrokeDash::new(vec![5.0, 5.0], 0.0),
                ..Default::default()
            };
            self.overlay
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        let handle = bounds.handle_rect();
        let mut pb = PathBuilder::new();
        pb.move_to(handle.x as f32, handle.y as f32);
        pb.line_to(handle.right() as f32, handle.y as f32);
        pb.line_to(handle.right() as f32, handle.bottom() as f32);
        pb.line_to(handle.x as f32, handle.bottom() as f32);
        pb.close();
        if let Some(path) = pb.finish() {
            self.overlay
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Clears the committed buffer and redraws every store object in paint
    /// order. Deterministic: repainting the same store twice is
    /// pixel-identical.
    pub fn repaint(&mut self, store: &ObjectStore) {
        self.committed.fill(Color::TRANSPARENT);
        for object in store.iter() {
            match object {
                SketchObject::Text(text) => self.draw_text(text),
                SketchObject::Image(image) => self.draw_image(image),
            }
        }
    }

    /// Rasterizes a text object with its stored y as the baseline.
    fn draw_text(&mut self, text: &TextObject) {
        let Some(font) = font_manager::default_font() else {
            return;
        };
        let scale = Scale::uniform(text.font_size as f32);
        let start = rt_point(text.x as f32, text.y as f32);
        let color = text.color;
        let width = self.committed.width();
        let height = self.committed.height();
        let data = self.committed.data_mut();

        for glyph in font.layout(&text.content, scale, start) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = gx as i32 + bb.min.x;
                    let py = gy as i32 + bb.min.y;
                    if px < 0 || px >= width as i32 || py < 0 || py >= height as i32 {
                        return;
                    }
                    let alpha = (v * 255.0) as u8;
                    if alpha == 0 {
                        return;
                    }
                    // Premultiplied write, glyph coverage as alpha.
                    let idx = ((py as u32 * width + px as u32) * 4) as usize;
                    data[idx] = (color.r as u16 * alpha as u16 / 255) as u8;
                    data[idx + 1] = (color.g as u16 * alpha as u16 / 255) as u8;
                    data[idx + 2] = (color.b as u16 * alpha as u16 / 255) as u8;
                    data[idx + 3] = alpha;
                });
            }
        }
    }

    /// Blits an image object scaled to its stored extent.
    fn draw_image(&mut self, image: &ImageObject) {
        let pm = &image.pixmap;
        if pm.width() == 0 || pm.height() == 0 {
            return;
        }
        let sx = (image.width / pm.width() as f64) as f32;
        let sy = (image.height / pm.height() as f64) as f32;
        if !sx.is_finite() || !sy.is_finite() || sx <= 0.0 || sy <= 0.0 {
            return;
        }
        let transform = Transform::from_row(sx, 0.0, 0.0, sy, image.x as f32, image.y as f32);
        self.committed
            .draw_pixmap(0, 0, pm.as_ref(), &PixmapPaint::default(), transform, None);
    }

    /// Committed buffer with the overlay composited on top, for host
    /// presentation. The result is never fed back into the committed buffer.
    pub fn composite(&self) -> Pixmap {
        let mut out = self.committed.clone();
        out.draw_pixmap(
            0,
            0,
            self.overlay.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        out
    }

    /// Deep copy of the committed buffer, for history snapshots.
    pub fn snapshot_committed(&self) -> Pixmap {
        self.committed.clone()
    }

    /// Replaces the committed buffer from a snapshot or loaded document.
    /// The overlay is recreated when the incoming raster has a different
    /// size.
    pub fn restore_committed(&mut self, pixmap: Pixmap) {
        if pixmap.width() != self.overlay.width() || pixmap.height() != self.overlay.height() {
            if let Some(overlay) = Pixmap::new(pixmap.width(), pixmap.height()) {
                self.overlay = overlay;
            }
        }
        self.committed = pixmap;
    }

    pub fn clear_committed(&mut self) {
        self.committed.fill(Color::TRANSPARENT);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay.fill(Color::TRANSPARENT);
    }

    pub fn clear_all(&mut self) {
        self.clear_committed();
        self.clear_overlay();
    }
}
