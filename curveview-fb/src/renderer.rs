/// 2D rendering wrapper around tiny-skia.

use std::path::Path;

use anyhow::{Context, Result};
use curveview::{Color, PathInstruction};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8,
    Stroke, Transform,
};

use crate::theme::ToSkia;

pub struct Renderer {
    pub pixmap: Pixmap,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("create {}x{} pixmap", width, height))?;
        Ok(Self { pixmap })
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Stroke a chart path. Does nothing for a path without segments.
    pub fn stroke_path(&mut self, path: &[PathInstruction], color: Color, width: f32) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        let mut stroke = Stroke::default();
        stroke.width = width;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        let mut pb = PathBuilder::new();
        for inst in path {
            match *inst {
                PathInstruction::MoveTo { x, y } => pb.move_to(x as f32, y as f32),
                PathInstruction::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => pb.cubic_to(
                    c1x as f32, c1y as f32, c2x as f32, c2y as f32, x as f32, y as f32,
                ),
            }
        }
        // A lone move_to finishes to None.
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Composite an 8-bit coverage mask of `w`x`h` with its top-left at (x, y).
    /// Parts outside the surface are clipped.
    pub fn draw_coverage(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        coverage: &[u8],
        color: Color,
    ) {
        let Some(mut mask) = Pixmap::new(w, h) else {
            return;
        };
        for (px, &cov) in mask.pixels_mut().iter_mut().zip(coverage) {
            let a = scale(cov, color.a);
            if let Some(c) = PremultipliedColorU8::from_rgba(
                scale(color.r, a),
                scale(color.g, a),
                scale(color.b, a),
                a,
            ) {
                *px = c;
            }
        }
        self.pixmap.draw_pixmap(
            x,
            y,
            mask.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .with_context(|| format!("write {}", path.display()))
    }
}

/// `c * a / 255`, rounded.
fn scale(c: u8, a: u8) -> u8 {
    ((c as u16 * a as u16 + 127) / 255) as u8
}
