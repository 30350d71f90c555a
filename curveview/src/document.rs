/// On-disk chart description.
///
/// ```json
/// {
///   "values": [10, 50, 20, 80],
///   "labels": ["Mon", "Tue", "Wed", "Thu"],
///   "max": 80,
///   "width": 300,
///   "height": 200,
///   "padding": { "left": 24, "right": 24, "top": 16, "bottom": 8 },
///   "style": { "smoothness_ratio": 0.16, "show_control_points": true }
/// }
/// ```

use serde::{Deserialize, Serialize};

use crate::chart::{ChartData, ChartLayout, Geometry, LabelMetrics};
use crate::error::Result;
use crate::geometry::{Bounds, Padding};
use crate::style::ChartStyle;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    pub max: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartDocument {
    pub fn data(&self) -> ChartData {
        ChartData::new(self.values.clone(), self.labels.clone(), self.max)
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            bounds: Bounds::new(self.width, self.height),
            padding: self.padding,
        }
    }

    pub fn layout(&self, metrics: &dyn LabelMetrics) -> Result<ChartLayout> {
        ChartLayout::compute(&self.data(), &self.geometry(), &self.style, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::FixedLabelHeight;

    #[test]
    fn minimal_document_uses_defaults() {
        let doc: ChartDocument = serde_json::from_str(
            r#"{"values": [1, 2], "labels": ["a", "b"], "max": 2, "width": 100, "height": 80}"#,
        )
        .unwrap();
        assert_eq!(doc.padding, Padding::ZERO);
        assert_eq!(doc.style, ChartStyle::default());

        let layout = doc.layout(&FixedLabelHeight(10.0)).unwrap();
        assert_eq!(layout.points.len(), 2);
        assert_eq!(layout.points[1].x, 100.0);
    }

    #[test]
    fn partial_padding_fills_zeroes() {
        let doc: ChartDocument = serde_json::from_str(
            r#"{"values": [1], "labels": ["a"], "max": 1, "width": 10, "height": 50,
                "padding": {"left": 4}}"#,
        )
        .unwrap();
        assert_eq!(doc.padding.left, 4.0);
        assert_eq!(doc.padding.bottom, 0.0);
        assert_eq!(doc.geometry().bounds, Bounds::new(10.0, 50.0));
    }

    #[test]
    fn missing_values_fail_to_parse() {
        let res: std::result::Result<ChartDocument, _> =
            serde_json::from_str(r#"{"labels": [], "max": 1, "width": 10, "height": 10}"#);
        assert!(res.is_err());
    }
}
