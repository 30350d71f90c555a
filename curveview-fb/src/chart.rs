/// Chart widget: draws a computed layout.

use curveview::{ChartLayout, ChartStyle};

use crate::renderer::Renderer;
use crate::text::TextRenderer;

/// Draw a chart layout. Captions are skipped when no font is available.
pub fn draw_chart(
    renderer: &mut Renderer,
    text: Option<&TextRenderer>,
    layout: &ChartLayout,
    style: &ChartStyle,
) {
    renderer.clear(style.background);
    renderer.stroke_path(&layout.path, style.stroke_color, style.stroke_width as f32);

    let radius = style.dot_radius as f32;
    for point in &layout.points {
        renderer.fill_circle(point.x as f32, point.y as f32, radius, style.dot_color);
    }

    if let Some(text) = text {
        for label in &layout.labels {
            text.draw_centered(
                renderer,
                &label.text,
                label.x as f32,
                label.y as f32,
                style.label_color,
            );
        }
    }

    if style.show_control_points {
        for pair in &layout.controls {
            for c in [pair.c1, pair.c2] {
                renderer.fill_circle(c.x as f32, c.y as f32, radius, style.control_point_color);
            }
        }
    }
}
