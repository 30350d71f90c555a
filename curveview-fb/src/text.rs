/// Axis captions with fontdue: glyph metrics for layout, coverage masks for drawing.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use curveview::{Color, LabelMetrics};
use fontdue::{Font, FontSettings};

use crate::renderer::Renderer;

static DEJAVU_SANS_TTF: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

pub struct TextRenderer {
    font: Font,
    size: f32,
}

impl TextRenderer {
    /// The bundled DejaVu Sans face.
    pub fn embedded(size: f32) -> Result<Self> {
        Self::from_bytes(DEJAVU_SANS_TTF, size)
    }

    pub fn from_file(path: &Path, size: f32) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font {}", path.display()))?;
        Self::from_bytes(&bytes, size)
    }

    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow!("load font: {}", e))?;
        Ok(Self { font, size })
    }

    /// Draw one line with its baseline at `y`. Returns the advance width.
    pub fn draw(&self, renderer: &mut Renderer, text: &str, x: f32, y: f32, color: Color) -> f32 {
        let mut pen = x;
        for ch in text.chars() {
            let (m, coverage) = self.font.rasterize(ch, self.size);
            if !coverage.is_empty() {
                // fontdue's ymin is the bitmap bottom relative to the baseline, y up.
                let top = y.round() as i32 - m.ymin - m.height as i32;
                let left = pen.round() as i32 + m.xmin;
                renderer.draw_coverage(
                    left,
                    top,
                    m.width as u32,
                    m.height as u32,
                    &coverage,
                    color,
                );
            }
            pen += m.advance_width;
        }
        pen - x
    }

    pub fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.size).advance_width)
            .sum()
    }

    /// Draw text centered horizontally on `cx`, baseline at `y`.
    pub fn draw_centered(&self, renderer: &mut Renderer, text: &str, cx: f32, y: f32, color: Color) {
        let w = self.measure(text);
        self.draw(renderer, text, cx - w / 2.0, y, color);
    }
}

impl LabelMetrics for TextRenderer {
    /// Tight ink height: highest glyph top minus lowest glyph bottom.
    fn label_height(&self, label: &str) -> f64 {
        let extents = label
            .chars()
            .map(|ch| self.font.metrics(ch, self.size))
            .filter(|m| m.height > 0)
            .map(|m| (m.ymin + m.height as i32, m.ymin));
        let (top, bottom) = extents.fold((i32::MIN, i32::MAX), |(t, b), (gt, gb)| {
            (t.max(gt), b.min(gb))
        });
        if top < bottom {
            0.0
        } else {
            (top - bottom) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 20.0;

    fn font() -> TextRenderer {
        TextRenderer::embedded(SIZE).unwrap()
    }

    /// Rows and columns holding any non-white pixel.
    fn ink_box(r: &Renderer) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for y in 0..r.height() {
            for x in 0..r.width() {
                let p = r.pixmap.pixel(x, y).unwrap();
                if (p.red(), p.green(), p.blue()) == (255, 255, 255) {
                    continue;
                }
                found = Some(match found {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        found
    }

    #[test]
    fn cap_height_is_a_fraction_of_size() {
        let h = font().label_height("H");
        assert!(h > SIZE as f64 * 0.5 && h < SIZE as f64, "got {h}");
    }

    #[test]
    fn descenders_add_height() {
        let text = font();
        assert!(text.label_height("Hg") > text.label_height("H"));
        assert!(text.label_height("x") < text.label_height("H"));
    }

    #[test]
    fn blank_labels_have_no_height() {
        let text = font();
        assert_eq!(text.label_height(""), 0.0);
        assert_eq!(text.label_height("   "), 0.0);
    }

    #[test]
    fn draw_returns_measured_width() {
        let text = font();
        let mut r = Renderer::new(120, 40).unwrap();
        r.clear(Color::WHITE);
        let w = text.draw(&mut r, "Mon", 4.0, 30.0, Color::BLACK);
        assert!(w > 0.0);
        assert!((w - text.measure("Mon")).abs() < 1e-3);
    }

    #[test]
    fn glyphs_sit_on_the_baseline() {
        let text = font();
        let mut r = Renderer::new(60, 40).unwrap();
        r.clear(Color::WHITE);
        text.draw(&mut r, "H", 10.0, 30.0, Color::BLACK);

        let (x0, y0, _, y1) = ink_box(&r).expect("H leaves ink");
        assert!(x0 >= 10);
        assert!(y1 <= 30, "ink below baseline at row {y1}");
        assert!(y0 >= 30 - SIZE as u32);
    }

    #[test]
    fn centered_text_straddles_anchor() {
        let text = font();
        let mut r = Renderer::new(100, 40).unwrap();
        r.clear(Color::WHITE);
        text.draw_centered(&mut r, "Wed", 50.0, 30.0, Color::BLACK);

        let (x0, _, x1, _) = ink_box(&r).expect("caption leaves ink");
        assert!(x0 < 50 && x1 > 50);
        let mid = (x0 + x1) as f32 / 2.0;
        assert!((mid - 50.0).abs() < 4.0, "ink centered at {mid}");
    }

    #[test]
    fn glyphs_clip_at_the_surface_edge() {
        let text = font();
        let mut r = Renderer::new(16, 16).unwrap();
        r.clear(Color::WHITE);
        // Mostly off the left and bottom edges.
        text.draw(&mut r, "W", -8.0, 24.0, Color::BLACK);
        text.draw(&mut r, "W", 40.0, 10.0, Color::BLACK);
    }
}
