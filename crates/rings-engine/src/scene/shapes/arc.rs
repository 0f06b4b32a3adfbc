use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Round-capped circular arc stroke.
///
/// The arc runs clockwise (increasing angle) from `start_angle` to `end_angle`
/// along the circle of `radius` around `center`; `width` is the stroke width
/// centered on that circle.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub width: f32,
    pub paint: Paint,
}

impl ArcCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, start_angle: f32, end_angle: f32, width: f32, paint: Paint) -> Self {
        Self { center, radius, start_angle, end_angle, width, paint }
    }

    /// Angular span in radians.
    #[inline]
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

impl DrawList {
    /// Records an arc stroke.
    #[inline]
    pub fn push_arc(&mut self, z: ZIndex, arc: ArcCmd) {
        self.push(z, DrawCmd::Arc(arc));
    }

    /// Records a full circle stroke (`0..2π`).
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, width: f32, paint: Paint) {
        self.push_arc(z, ArcCmd::new(center, radius, 0.0, core::f32::consts::TAU, width, paint));
    }
}
