//! curveview-fb: rasterize a chart description to PNG.
//!
//! Usage: `curveview-fb <chart.json> <out.png>`
//!
//! Environment:
//! - `CURVEVIEW_FONT`: TTF/OTF used for axis captions instead of the bundled
//!   DejaVu Sans. If no face loads, captions are skipped and their height is
//!   estimated from the style's label size.
//! - `CURVEVIEW_LOG`: log level (`error`..`trace`), default `info`.

mod chart;
mod renderer;
mod text;
mod theme;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use curveview::{ChartDocument, FixedLabelHeight, LabelMetrics};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::renderer::Renderer;
use crate::text::TextRenderer;

fn init_logging() -> Result<()> {
    let level = std::env::var("CURVEVIEW_LOG")
        .ok()
        .and_then(|v| Level::from_str(&v).ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_document(path: &Path) -> Result<ChartDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read chart {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse chart {}", path.display()))
}

fn load_font(size: f32) -> Option<TextRenderer> {
    if let Some(path) = std::env::var_os("CURVEVIEW_FONT") {
        match TextRenderer::from_file(Path::new(&path), size) {
            Ok(text) => return Some(text),
            Err(e) => warn!("{:#}; using bundled font", e),
        }
    }
    match TextRenderer::embedded(size) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Font unavailable, drawing without captions: {:#}", e);
            None
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;

    let mut args = std::env::args_os().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(i), Some(o)) => (PathBuf::from(i), PathBuf::from(o)),
        _ => bail!("usage: curveview-fb <chart.json> <out.png>"),
    };

    let doc = load_document(&input)?;
    let label_size = doc.style.label_size as f32;
    let text = load_font(label_size);
    let fallback = FixedLabelHeight((label_size * theme::CAP_HEIGHT_RATIO) as f64);
    let metrics: &dyn LabelMetrics = match &text {
        Some(t) => t,
        None => &fallback,
    };

    let layout = doc
        .layout(metrics)
        .with_context(|| format!("lay out {}", input.display()))?;
    info!(
        "Laid out {} points, {} segments",
        layout.points.len(),
        layout.controls.len()
    );

    let width = doc.width.ceil().max(1.0) as u32;
    let height = doc.height.ceil().max(1.0) as u32;
    let mut render = Renderer::new(width, height)?;
    chart::draw_chart(&mut render, text.as_ref(), &layout, &doc.style);

    render.save_png(&output)?;
    info!("Wrote {}x{} chart to {}", width, height, output.display());
    Ok(())
}
