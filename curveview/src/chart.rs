/// Chart layout: one full pass from raw data to everything a renderer draws.
///
/// A layout is computed wholesale from its inputs and never patched. The view
/// layer recomputes it whenever geometry changes and keeps only the latest
/// value; a failed pass leaves the caller's previous layout untouched.

use tracing::debug;

use crate::curve::{build_curve, control_points, ControlPointPair, PathInstruction};
use crate::error::{ChartError, Result};
use crate::geometry::{Bounds, Padding, Point, Sample};
use crate::mapper::map_samples;
use crate::style::ChartStyle;

/// Text measurement supplied by the rendering layer.
pub trait LabelMetrics {
    /// Height of the tight bounding box of `label` when rendered.
    fn label_height(&self, label: &str) -> f64;
}

/// Every label measures the same height. Useful headless and in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedLabelHeight(pub f64);

impl LabelMetrics for FixedLabelHeight {
    fn label_height(&self, _label: &str) -> f64 {
        self.0
    }
}

/// Input series: one value and one axis caption per sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    /// Value that maps to the top of the plot.
    pub max_value: f64,
}

impl ChartData {
    pub fn new(values: Vec<f64>, labels: Vec<String>, max_value: f64) -> Self {
        Self {
            values,
            labels,
            max_value,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(ChartError::EmptySamples);
        }
        if self.values.len() != self.labels.len() {
            return Err(ChartError::LabelCountMismatch {
                samples: self.values.len(),
                labels: self.labels.len(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub bounds: Bounds,
    pub padding: Padding,
}

/// Where to draw an axis caption: horizontally centered on `x`, baseline at `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelAnchor {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub points: Vec<Point>,
    pub controls: Vec<ControlPointPair>,
    pub path: Vec<PathInstruction>,
    pub labels: Vec<LabelAnchor>,
}

impl ChartLayout {
    pub fn compute(
        data: &ChartData,
        geometry: &Geometry,
        style: &ChartStyle,
        metrics: &dyn LabelMetrics,
    ) -> Result<Self> {
        data.validate()?;
        style.validate()?;

        // Captions share one baseline, sized from the first.
        let label_height = metrics.label_height(&data.labels[0]);
        let samples = Sample::from_values(&data.values);
        let mapping = map_samples(
            &samples,
            geometry.bounds,
            geometry.padding,
            data.max_value,
            label_height,
            style.label_gap,
            style.step_mode(),
        )?;

        let controls = control_points(&mapping.points, style.smoothness_ratio);
        let path = build_curve(&mapping.points, style.smoothness_ratio);

        let baseline = geometry.bounds.height - geometry.padding.bottom;
        let labels = data
            .labels
            .iter()
            .enumerate()
            .map(|(i, text)| LabelAnchor {
                text: text.clone(),
                x: geometry.padding.left + i as f64 * mapping.step,
                y: baseline,
            })
            .collect();

        debug!(
            points = mapping.points.len(),
            segments = controls.len(),
            label_height,
            "chart layout computed"
        );

        Ok(Self {
            points: mapping.points,
            controls,
            path,
            labels,
        })
    }
}
