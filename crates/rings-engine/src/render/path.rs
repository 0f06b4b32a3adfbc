use core::f32::consts::FRAC_PI_2;

use resvg::tiny_skia::{Path, PathBuilder};

use crate::coords::Vec2;

/// One cubic Bézier piece: start point, two control points, end point.
pub type CubicSegment = [Vec2; 4];

/// Approximates a circular arc with cubic Béziers.
///
/// The sweep is split into pieces of at most a quarter turn; each piece uses
/// the `4/3 · tan(θ/4)` control-point distance, which keeps the radial error
/// well under a pixel at ring sizes.
pub fn arc_beziers(center: Vec2, radius: f32, start_angle: f32, end_angle: f32) -> Vec<CubicSegment> {
    let sweep = end_angle - start_angle;
    if !sweep.is_finite() || sweep == 0.0 || radius <= 0.0 {
        return Vec::new();
    }

    let pieces = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / pieces as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;

    (0..pieces)
        .map(|i| {
            let a0 = start_angle + step * i as f32;
            let a1 = a0 + step;
            let p0 = Vec2::on_circle(center, radius, a0);
            let p3 = Vec2::on_circle(center, radius, a1);
            // Tangents point in the direction of increasing angle.
            let t0 = Vec2::new(-a0.sin(), a0.cos());
            let t1 = Vec2::new(-a1.sin(), a1.cos());
            [p0, p0 + t0 * k, p3 - t1 * k, p3]
        })
        .collect()
}

/// Builds a stroke path for the arc; `None` for degenerate arcs.
pub(super) fn arc_path(center: Vec2, radius: f32, start_angle: f32, end_angle: f32) -> Option<Path> {
    let segments = arc_beziers(center, radius, start_angle, end_angle);
    let first = segments.first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(first[0].x, first[0].y);
    for [_, c1, c2, p] in &segments {
        pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }
    pb.finish()
}
