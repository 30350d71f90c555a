/// Point mapper: raw samples to plot-space coordinates.
///
/// Horizontal placement is uniform across the padded width. Vertically the
/// plot reserves `label_height + gap` at the bottom for the axis captions and
/// scales values linearly so that `max_value` touches the top padding.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::geometry::{Bounds, Padding, Point, Sample};

/// How the horizontal step between samples is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepMode {
    /// `plot_width / (n - 1)` in floating point.
    #[default]
    Exact,
    /// Same, truncated to whole units so dots sit on pixel columns.
    PixelSnap,
}

/// Result of a mapping pass, with the derived scale kept for the label layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping {
    pub points: Vec<Point>,
    pub step: f64,
    pub bar_height: f64,
    pub height_ratio: f64,
}

/// Map samples into plot space.
pub fn map_points(
    samples: &[Sample],
    bounds: Bounds,
    padding: Padding,
    max_value: f64,
    label_height: f64,
    gap: f64,
) -> Result<Vec<Point>> {
    map_samples(samples, bounds, padding, max_value, label_height, gap, StepMode::Exact)
        .map(|m| m.points)
}

/// Map samples into plot space, returning the full [`Mapping`].
///
/// A single sample is valid: the step is zero and the point sits on the left
/// padding edge. Padding that consumes the full width or height is rejected
/// on either axis. Positions come from slice order; [`Sample::index`] is not
/// consulted.
pub fn map_samples(
    samples: &[Sample],
    bounds: Bounds,
    padding: Padding,
    max_value: f64,
    label_height: f64,
    gap: f64,
    mode: StepMode,
) -> Result<Mapping> {
    if samples.is_empty() {
        return Err(ChartError::EmptySamples);
    }
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(ChartError::InvalidMaxValue(max_value));
    }

    let plot_width = bounds.width - padding.left - padding.right;
    let plot_height = bounds.height - padding.top - padding.bottom;
    let bar_height = plot_height - label_height - gap;
    // Both axes need positive extent, whatever the sample count.
    if plot_width <= 0.0 || plot_height <= 0.0 || bar_height <= 0.0 {
        return Err(ChartError::NonPositivePlotArea {
            width: plot_width,
            height: bar_height.min(plot_height),
        });
    }

    let step = match samples.len() {
        1 => 0.0,
        n => {
            let step = plot_width / (n - 1) as f64;
            match mode {
                StepMode::Exact => step,
                StepMode::PixelSnap => step.trunc(),
            }
        }
    };
    let height_ratio = bar_height / max_value;

    debug!(
        samples = samples.len(),
        step, bar_height, height_ratio, "mapped chart geometry"
    );

    let points = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let transformed_value = sample.value * height_ratio;
            Point {
                x: step * i as f64 + padding.left,
                y: padding.top + bar_height - transformed_value,
                value: sample.value,
                transformed_value,
            }
        })
        .collect();

    Ok(Mapping {
        points,
        step,
        bar_height,
        height_ratio,
    })
}
