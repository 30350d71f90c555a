//! curveview: smoothed line chart layout
//!
//! Maps a series of values into plot space and threads a cardinal-spline
//! curve through the resulting dots. The output is plain data for any drawing
//! surface to consume.

pub mod chart;
pub mod curve;
pub mod document;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod style;

pub use chart::{ChartData, ChartLayout, FixedLabelHeight, Geometry, LabelAnchor, LabelMetrics};
pub use curve::{
    build_curve, control_points, ControlPointPair, Neighbors, PathInstruction, DEFAULT_SMOOTHNESS,
};
pub use document::ChartDocument;
pub use error::{ChartError, Result};
pub use geometry::{Bounds, Padding, Point, Sample, Vec2};
pub use mapper::{map_points, map_samples, Mapping, StepMode};
pub use style::{ChartStyle, Color};
