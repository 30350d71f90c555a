/// Layout errors. All of them are input errors caught before any point is produced.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart needs at least one sample")]
    EmptySamples,

    #[error("{samples} samples but {labels} axis labels")]
    LabelCountMismatch { samples: usize, labels: usize },

    #[error("max value must be finite and positive, got {0}")]
    InvalidMaxValue(f64),

    /// Padding, label height and gap leave no room to plot in.
    #[error("plot area is {width}x{height} after padding and labels")]
    NonPositivePlotArea { width: f64, height: f64 },

    #[error("smoothness ratio must be in [0, 1), got {0}")]
    InvalidSmoothness(f64),
}

pub type Result<T> = std::result::Result<T, ChartError>;
