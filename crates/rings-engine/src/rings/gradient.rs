use core::f32::consts::FRAC_PI_2;

use crate::coords::Vec2;
use crate::paint::{Color, LinearGradient};

/// Where a half-circle segment starts and which way its gradient runs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SweepDirection {
    /// Starts at 12 o'clock; gradient runs top to bottom.
    TopDown,
    /// Starts at 6 o'clock; gradient runs bottom to top.
    BottomUp,
}

impl SweepDirection {
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            SweepDirection::TopDown => SweepDirection::BottomUp,
            SweepDirection::BottomUp => SweepDirection::TopDown,
        }
    }

    /// Angle the segment starts at.
    #[inline]
    pub const fn start_angle(self) -> f32 {
        match self {
            SweepDirection::TopDown => -FRAC_PI_2,
            SweepDirection::BottomUp => FRAC_PI_2,
        }
    }
}

/// Vertical two-stop gradient spanning a ring's inner edge, top to bottom
/// (or bottom to top for [`SweepDirection::BottomUp`]).
///
/// The axis runs through `center.x`, from `radius - line_width / 2` above the
/// center to the same distance below it; `start` sits at stop 0, `stop` at 1.
pub fn ring_gradient(
    center: Vec2,
    direction: SweepDirection,
    start: Color,
    stop: Color,
    radius: f32,
    line_width: f32,
) -> LinearGradient {
    let reach = radius - line_width / 2.0;
    let top = Vec2::new(center.x, center.y - reach);
    let bottom = Vec2::new(center.x, center.y + reach);

    let (from, to) = match direction {
        SweepDirection::TopDown => (top, bottom),
        SweepDirection::BottomUp => (bottom, top),
    };
    LinearGradient::two_stop(from, to, start, stop)
}
