use resvg::tiny_skia::{self, GradientStop, Point, Shader, SpreadMode, Transform};

use crate::paint::{Color, ColorStop, Paint};

#[inline]
pub(super) fn sk_color(c: Color) -> tiny_skia::Color {
    let [r, g, b, a] = c.to_srgb_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

#[inline]
fn sk_point(v: crate::coords::Vec2) -> Point {
    Point::from_xy(v.x, v.y)
}

fn sk_stops(stops: &[ColorStop]) -> Vec<GradientStop> {
    stops.iter().map(|s| GradientStop::new(s.t, sk_color(s.color))).collect()
}

/// Fallback for gradients the rasterizer cannot build: the last stop as a solid fill.
fn last_stop(stops: &[ColorStop]) -> Shader<'static> {
    let color = stops.last().map_or(Color::transparent(), |s| s.color);
    Shader::SolidColor(sk_color(color))
}

/// Converts a `Paint` to a tiny-skia shader. Gradients pad outside their range.
///
/// Invalid gradients (fewer than two stops, zero-length axis, non-finite
/// values) degrade to a solid fill so a single bad paint never aborts a frame.
pub(super) fn resolve_paint(paint: &Paint) -> Shader<'static> {
    match paint {
        Paint::Solid(c) => Shader::SolidColor(sk_color(*c)),
        Paint::LinearGradient(g) => {
            if !g.is_valid() {
                log::debug!("degenerate linear gradient; drawing solid");
                return last_stop(&g.stops);
            }
            tiny_skia::LinearGradient::new(
                sk_point(g.start),
                sk_point(g.end),
                sk_stops(&g.stops),
                SpreadMode::Pad,
                Transform::identity(),
            )
            .unwrap_or_else(|| last_stop(&g.stops))
        }
        Paint::RadialGradient(g) => {
            if !g.is_valid() {
                log::debug!("degenerate radial gradient; drawing solid");
                return last_stop(&g.stops);
            }
            let center = sk_point(g.center);
            tiny_skia::RadialGradient::new(
                center,
                center,
                g.radius,
                sk_stops(&g.stops),
                SpreadMode::Pad,
                Transform::identity(),
            )
            .unwrap_or_else(|| last_stop(&g.stops))
        }
    }
}
