/// Curve builder: cardinal-spline smoothing through plot-space points.
///
/// Every consecutive pair of points becomes one cubic Bézier segment. The
/// control points of segment `i` are taken from the tangent at each end,
/// estimated from the neighbors on either side:
///
/// ```text
/// c1 = current + ratio * (next - previous)
/// c2 = next    - ratio * (next_next - current)
/// ```
///
/// At the ends of the series a missing neighbor is clamped to the nearest
/// existing point (see [`Neighbors::around`]), so the first and last segments
/// leave their outer endpoint with a tangent pointing at the adjacent dot.

use tracing::trace;

use crate::geometry::{Point, Vec2};

/// Tension used when the caller does not pick one.
pub const DEFAULT_SMOOTHNESS: f64 = 0.16;

/// A single path drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathInstruction {
    MoveTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

impl PathInstruction {
    /// The point the pen ends up at after this instruction.
    pub fn end(&self) -> Vec2 {
        match *self {
            PathInstruction::MoveTo { x, y } => Vec2::new(x, y),
            PathInstruction::CubicTo { x, y, .. } => Vec2::new(x, y),
        }
    }
}

/// Control points of one curve segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPointPair {
    pub c1: Vec2,
    pub c2: Vec2,
}

/// The four points that shape segment `i`, after boundary clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbors {
    pub previous: Vec2,
    pub current: Vec2,
    pub next: Vec2,
    pub next_next: Vec2,
}

impl Neighbors {
    /// Neighbors of the segment from `points[i]` to `points[i + 1]`.
    ///
    /// `previous` falls back to `current` on the first segment and
    /// `next_next` falls back to `next` on the last one. Returns `None` when
    /// `i + 1` is out of range.
    pub fn around(points: &[Point], i: usize) -> Option<Self> {
        let current = points.get(i)?.position();
        let next = points.get(i + 1)?.position();
        let previous = match i.checked_sub(1) {
            Some(p) => points[p].position(),
            None => current,
        };
        let next_next = points.get(i + 2).map_or(next, Point::position);
        Some(Self {
            previous,
            current,
            next,
            next_next,
        })
    }

    pub fn control_points(&self, ratio: f64) -> ControlPointPair {
        ControlPointPair {
            c1: Vec2::new(
                self.current.x + ratio * (self.next.x - self.previous.x),
                self.current.y + ratio * (self.next.y - self.previous.y),
            ),
            c2: Vec2::new(
                self.next.x - ratio * (self.next_next.x - self.current.x),
                self.next.y - ratio * (self.next_next.y - self.current.y),
            ),
        }
    }
}

/// Control points for every segment, in order. Empty for fewer than two points.
pub fn control_points(points: &[Point], ratio: f64) -> Vec<ControlPointPair> {
    (0..points.len().saturating_sub(1))
        .filter_map(|i| Neighbors::around(points, i))
        .map(|n| n.control_points(ratio))
        .collect()
}

/// Build the smooth path through `points`.
///
/// The result is one `MoveTo` to the first point followed by one `CubicTo`
/// per consecutive pair. A single point yields only the `MoveTo`; no points
/// yield an empty path.
pub fn build_curve(points: &[Point], ratio: f64) -> Vec<PathInstruction> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(points.len());
    path.push(PathInstruction::MoveTo {
        x: first.x,
        y: first.y,
    });

    for (pair, end) in control_points(points, ratio).into_iter().zip(&points[1..]) {
        trace!(
            c1x = pair.c1.x,
            c1y = pair.c1.y,
            c2x = pair.c2.x,
            c2y = pair.c2.y,
            "segment control points"
        );
        path.push(PathInstruction::CubicTo {
            c1x: pair.c1.x,
            c1y: pair.c1.y,
            c2x: pair.c2.x,
            c2y: pair.c2.y,
            x: end.x,
            y: end.y,
        });
    }
    path
}
