/// Chart style: cosmetic knobs passed through to the renderer, plus the
/// smoothing tension and step mode that feed the layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::DEFAULT_SMOOTHNESS;
use crate::error::{ChartError, Result};
use crate::mapper::StepMode;

/// 8-bit RGBA color. Serialized as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const GRAY: Color = Color::rgb(0x44, 0x44, 0x44);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color {s:?} must start with '#'"))?;
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("color {s:?} must be #RRGGBB or #RRGGBBAA"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("color {s:?}: {e}"))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Curve tension in `[0, 1)`. 0 draws straight segments.
    pub smoothness_ratio: f64,
    pub dot_radius: f64,
    /// Space between the axis labels and the bottom of the curve area.
    pub label_gap: f64,
    pub label_size: f64,
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub dot_color: Color,
    pub label_color: Color,
    pub background: Color,
    /// Draw each segment's control points as dots (debug overlay).
    pub show_control_points: bool,
    pub control_point_color: Color,
    /// Truncate the horizontal step to whole pixels.
    pub pixel_snap: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            smoothness_ratio: DEFAULT_SMOOTHNESS,
            dot_radius: 4.0,
            label_gap: 8.0,
            label_size: 20.0,
            stroke_width: 3.0,
            stroke_color: Color::BLUE,
            dot_color: Color::BLACK,
            label_color: Color::GRAY,
            background: Color::WHITE,
            show_control_points: false,
            control_point_color: Color::GREEN,
            pixel_snap: false,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> Result<()> {
        let r = self.smoothness_ratio;
        if !r.is_finite() || !(0.0..1.0).contains(&r) {
            return Err(ChartError::InvalidSmoothness(r));
        }
        Ok(())
    }

    pub fn step_mode(&self) -> StepMode {
        if self.pixel_snap {
            StepMode::PixelSnap
        } else {
            StepMode::Exact
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            Color::try_from("#58A6FF".to_string()),
            Ok(Color::rgb(0x58, 0xA6, 0xFF))
        );
        assert_eq!(
            Color::try_from("#58a6ff80".to_string()),
            Ok(Color::rgba(0x58, 0xA6, 0xFF, 0x80))
        );
        assert!(Color::try_from("58A6FF".to_string()).is_err());
        assert!(Color::try_from("#58A6F".to_string()).is_err());
        assert!(Color::try_from("#GGGGGG".to_string()).is_err());
    }

    #[test]
    fn rejects_signed_channels() {
        assert!(Color::try_from("#+F+F+F".to_string()).is_err());
        assert!(Color::try_from("#FF+F00".to_string()).is_err());
        assert!(Color::try_from("#00FF00+F".to_string()).is_err());
    }

    #[test]
    fn displays_alpha_only_when_translucent() {
        assert_eq!(Color::BLUE.to_string(), "#0000FF");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn default_style_is_valid() {
        let style = ChartStyle::default();
        assert_eq!(style.smoothness_ratio, 0.16);
        assert!(style.validate().is_ok());
        assert_eq!(style.step_mode(), StepMode::Exact);
    }

    #[test]
    fn rejects_out_of_range_smoothness() {
        for r in [-0.1, 1.0, 2.5, f64::NAN] {
            let style = ChartStyle {
                smoothness_ratio: r,
                ..ChartStyle::default()
            };
            assert!(matches!(
                style.validate(),
                Err(ChartError::InvalidSmoothness(_))
            ));
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let style: ChartStyle =
            serde_json::from_str(r##"{"smoothness_ratio": 0.3, "stroke_color": "#FF0000"}"##)
                .unwrap();
        assert_eq!(style.smoothness_ratio, 0.3);
        assert_eq!(style.stroke_color, Color::rgb(0xFF, 0, 0));
        assert_eq!(style.dot_radius, 4.0);
        assert!(!style.pixel_snap);
    }
}
