use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]. Colors before the first stop and after the last
/// stop pad with the edge colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient between two points in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Two-stop gradient: `from` at `start`, `to` at `end`.
    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.start != self.end
    }
}

/// Radial gradient centered on `center`; `t = 0` at the center, `t = 1` at `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }

    /// Gradient that holds `inner` up to `inner_radius`, then fades to `outer` at `outer_radius`.
    ///
    /// Expresses a two-circle radial gradient (same center, two radii) with a
    /// single radius by moving the first stop outward.
    pub fn annulus(center: Vec2, inner_radius: f32, outer_radius: f32, inner: Color, outer: Color) -> Self {
        let t0 = if outer_radius > 0.0 {
            (inner_radius / outer_radius).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self::new(center, outer_radius, vec![ColorStop::new(t0, inner), ColorStop::new(1.0, outer)])
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }
}
