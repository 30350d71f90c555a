/// Plot-space value types shared by the mapper and the curve builder.

use serde::{Deserialize, Serialize};

/// A 2D coordinate on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub const fn uniform(p: f64) -> Self {
        Self {
            left: p,
            right: p,
            top: p,
            bottom: p,
        }
    }

    pub const ZERO: Padding = Padding::uniform(0.0);
}

/// A raw datum as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Caller-side identifier of the datum. Layout ignores it: horizontal
    /// position is the sample's position in the slice handed to the mapper.
    pub index: usize,
    pub value: f64,
}

impl Sample {
    /// Index a plain value series in order.
    pub fn from_values(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| Sample { index, value })
            .collect()
    }
}

/// A sample placed in plot space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// The original sample value.
    pub value: f64,
    /// `value * height_ratio`, i.e. the dot's height above the baseline.
    pub transformed_value: f64,
}

impl Point {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
