use core::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::coords::Vec2;
use crate::paint::{blend, Color, Paint, RadialGradient};
use crate::scene::{ArcCmd, DrawCmd, DrawList, ZIndex};

use super::gradient::{ring_gradient, SweepDirection};
use super::{Ring, RingsConfig};

/// Progress covered by one half-circle segment.
pub const SEGMENT_SPAN: f32 = 0.5;

/// Pushes the shadow a little past the true end of the sweep so it separates
/// from the arc's round cap. Fixed visual constant.
pub const SHADOW_ANGLE_OFFSET: f32 = 0.01 * PI;

/// Angle at which the overflow shadow of `value` is centered.
///
/// Always derived from the full value, not from the overflow amount.
#[inline]
pub fn shadow_angle(value: f32) -> f32 {
    value * TAU - FRAC_PI_2 + SHADOW_ANGLE_OFFSET
}

/// Records the draw commands for `value` on `ring`.
///
/// `1.0` is one full turn; anything above keeps wrapping and adds a shadow
/// under the leading end. Values `<= 0` (and non-finite ones) record nothing.
///
/// For every half turn the renderer emits one arc:
/// - odd segments start at 12 o'clock, even ones at 6 o'clock
/// - the arc's gradient runs from the previous segment's end color to
///   `blend(start, end, progress_so_far / value)`
///
/// When the ring overflows, the shadow disc is pushed right before the last
/// arc, so the arc paints over it and only the part past the cap shows.
pub fn render_progress(list: &mut DrawList, config: &RingsConfig, ring: &Ring, value: f32) {
    if !value.is_finite() {
        log::warn!("ignoring non-finite {} value {value}", ring.kind);
        return;
    }
    // TODO: a zero value could still draw a start-colored dot at 12 o'clock.
    if value <= 0.0 {
        return;
    }

    let needs_shadow = value >= 1.0;
    let mut remaining = value;
    let mut direction = SweepDirection::TopDown;
    let mut from = ring.start;
    let mut accumulated = 0.0;

    while remaining > 0.0 {
        let start_angle = direction.start_angle();

        if needs_shadow && remaining <= SEGMENT_SPAN {
            push_shadow(list, config, ring, shadow_angle(value));
        }

        let segment = remaining.min(SEGMENT_SPAN);
        let end_angle = (segment / SEGMENT_SPAN) * PI + start_angle;

        accumulated += segment;
        let to = blend(ring.start, ring.end, accumulated / value);

        log::debug!(
            "{} segment {:?}: {start_angle:.3}..{end_angle:.3} rad, {:.2}/{value:.2}",
            ring.kind,
            direction,
            accumulated,
        );

        let gradient = ring_gradient(ring.center, direction, from, to, ring.radius, config.line_width);
        list.push_arc(
            ZIndex::PROGRESS,
            ArcCmd::new(
                ring.center,
                ring.radius,
                start_angle,
                end_angle,
                config.line_width,
                Paint::LinearGradient(gradient),
            ),
        );

        remaining -= SEGMENT_SPAN;
        direction = direction.flip();
        from = to;
    }
}

/// Same as [`render_progress`], collected into a command vector.
pub fn progress_commands(config: &RingsConfig, ring: &Ring, value: f32) -> Vec<DrawCmd> {
    let mut list = DrawList::new();
    render_progress(&mut list, config, ring, value);
    list.commands().cloned().collect()
}

/// Soft black disc on the ring's centerline at `angle`.
fn push_shadow(list: &mut DrawList, config: &RingsConfig, ring: &Ring, angle: f32) {
    let center = Vec2::on_circle(ring.center, ring.radius, angle);
    let outer = config.line_width / 2.0;
    let inner = (outer - config.shadow_feather).max(0.0);

    let gradient = RadialGradient::annulus(
        center,
        inner,
        outer,
        Color::black(),
        Color::from_srgb_u8(0, 0, 0, 10),
    );
    list.push_circle(ZIndex::PROGRESS, center, outer, Paint::RadialGradient(gradient));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::RingType;

    const EPS: f32 = 1e-5;

    fn move_ring(config: &RingsConfig) -> Ring {
        config
            .layout(Vec2::splat(391.0))
            .into_iter()
            .find(|r| r.kind == RingType::Move)
            .unwrap()
    }

    fn arcs(cmds: &[DrawCmd]) -> Vec<&ArcCmd> {
        cmds.iter().filter_map(DrawCmd::as_arc).collect()
    }

    fn shadow_count(cmds: &[DrawCmd]) -> usize {
        cmds.iter().filter_map(DrawCmd::as_circle).count()
    }

    fn stop_bytes(arc: &ArcCmd) -> ([u8; 4], [u8; 4]) {
        let Paint::LinearGradient(g) = &arc.paint else { panic!("arc is not gradient-stroked") };
        (g.stops[0].color.to_srgb_u8(), g.stops[1].color.to_srgb_u8())
    }

    // ── empty / partial ───────────────────────────────────────────────────

    #[test]
    fn zero_value_draws_nothing() {
        let config = RingsConfig::default();
        assert!(progress_commands(&config, &move_ring(&config), 0.0).is_empty());
    }

    #[test]
    fn negative_and_non_finite_values_draw_nothing() {
        let config = RingsConfig::default();
        let ring = move_ring(&config);
        assert!(progress_commands(&config, &ring, -0.4).is_empty());
        assert!(progress_commands(&config, &ring, f32::NAN).is_empty());
        assert!(progress_commands(&config, &ring, f32::INFINITY).is_empty());
    }

    #[test]
    fn quarter_value_is_one_quarter_arc() {
        let config = RingsConfig::default();
        let cmds = progress_commands(&config, &move_ring(&config), 0.25);

        let arcs = arcs(&cmds);
        assert_eq!(arcs.len(), 1);
        assert_eq!(shadow_count(&cmds), 0);
        assert!((arcs[0].start_angle + FRAC_PI_2).abs() < EPS);
        assert!((arcs[0].end_angle - (-FRAC_PI_2 + 0.5 * PI)).abs() < EPS);
        assert_eq!(arcs[0].radius, 342.0);
        assert_eq!(arcs[0].width, 86.0);
    }

    #[test]
    fn partial_ring_sweeps_from_start_to_end_color() {
        let config = RingsConfig::default();
        let ring = move_ring(&config);
        let cmds = progress_commands(&config, &ring, 0.75);
        let arcs = arcs(&cmds);

        assert_eq!(arcs.len(), 2);
        assert_eq!(stop_bytes(arcs[0]).0, ring.start.to_srgb_u8());
        // Second segment picks up where the first stopped.
        assert_eq!(stop_bytes(arcs[1]).0, stop_bytes(arcs[0]).1);
        assert_eq!(stop_bytes(arcs[1]).1, ring.end.to_srgb_u8());
        assert!((arcs[1].sweep() - 0.5 * PI).abs() < EPS);
    }

    // ── full / overflow ───────────────────────────────────────────────────

    #[test]
    fn full_value_is_two_halves_and_one_shadow() {
        let config = RingsConfig::default();
        let ring = move_ring(&config);
        let cmds = progress_commands(&config, &ring, 1.0);

        let arcs = arcs(&cmds);
        assert_eq!(arcs.len(), 2);
        assert_eq!(shadow_count(&cmds), 1);
        for arc in &arcs {
            assert!((arc.sweep() - PI).abs() < EPS);
        }

        // Shadow precedes the final arc so the arc paints over it.
        assert!(matches!(cmds[1], DrawCmd::Circle(_)));
        assert!(matches!(cmds[2], DrawCmd::Arc(_)));

        let shadow = cmds[1].as_circle().unwrap();
        let expected = Vec2::on_circle(ring.center, ring.radius, shadow_angle(1.0));
        assert!((shadow.center - expected).length() < 1e-3);
        assert_eq!(shadow.radius, 43.0);
        assert!((shadow_angle(1.0) - (1.5 * PI + 0.01 * PI)).abs() < EPS);
    }

    #[test]
    fn overflow_alternates_direction_and_shadows_last_segment() {
        let config = RingsConfig::default();
        let ring = move_ring(&config);
        let cmds = progress_commands(&config, &ring, 1.5);

        let arcs = arcs(&cmds);
        assert_eq!(arcs.len(), 3);
        assert_eq!(shadow_count(&cmds), 1);

        let starts: Vec<f32> = arcs.iter().map(|a| a.start_angle).collect();
        assert_eq!(starts, vec![-FRAC_PI_2, FRAC_PI_2, -FRAC_PI_2]);

        // arc, arc, shadow, arc
        assert!(matches!(cmds[2], DrawCmd::Circle(_)));
        assert!(matches!(cmds[3], DrawCmd::Arc(_)));

        let Paint::LinearGradient(g0) = &arcs[0].paint else { unreachable!() };
        let Paint::LinearGradient(g1) = &arcs[1].paint else { unreachable!() };
        assert!(g0.start.y < g0.end.y, "first segment runs top-down");
        assert!(g1.start.y > g1.end.y, "second segment runs bottom-up");
    }

    #[test]
    fn overflow_shadow_follows_the_full_value() {
        let config = RingsConfig::default();
        let ring = move_ring(&config);

        for value in [1.5, 2.3] {
            let cmds = progress_commands(&config, &ring, value);
            let shadows: Vec<_> = cmds.iter().filter_map(DrawCmd::as_circle).collect();
            assert_eq!(shadows.len(), 1, "value {value}");

            let expected = Vec2::on_circle(ring.center, ring.radius, shadow_angle(value));
            assert!((shadows[0].center - expected).length() < 1e-2, "value {value}");
        }

        // 1.5 turns ends just past six o'clock.
        let cmds = progress_commands(&config, &ring, 1.5);
        let shadow = cmds.iter().find_map(DrawCmd::as_circle).unwrap();
        assert!(shadow.center.y > ring.center.y + ring.radius * 0.99);
        assert!(shadow.center.x < ring.center.x);
    }

    #[test]
    fn overflow_colors_normalize_against_full_value() {
        let config = RingsConfig::default();
        let ring = move_ring(&config);
        let cmds = progress_commands(&config, &ring, 2.0);
        let arcs = arcs(&cmds);

        assert_eq!(arcs.len(), 4);
        let first_stop = stop_bytes(arcs[0]).1;
        assert_eq!(first_stop, blend(ring.start, ring.end, 0.25).to_srgb_u8());
        assert_eq!(stop_bytes(arcs[3]).1, ring.end.to_srgb_u8());
    }

    #[test]
    fn just_over_full_sheds_a_tiny_final_segment() {
        let config = RingsConfig::default();
        let cmds = progress_commands(&config, &move_ring(&config), 1.1);
        let arcs = arcs(&cmds);

        assert_eq!(arcs.len(), 3);
        assert_eq!(shadow_count(&cmds), 1);
        assert!((arcs[2].sweep() - 0.2 * PI).abs() < 1e-4);
    }

    #[test]
    fn below_full_never_shadows() {
        let config = RingsConfig::default();
        let cmds = progress_commands(&config, &move_ring(&config), 0.99);
        assert_eq!(arcs(&cmds).len(), 2);
        assert_eq!(shadow_count(&cmds), 0);
    }

    #[test]
    fn shadow_gradient_fades_from_opaque_to_faint_black() {
        let config = RingsConfig::default();
        let cmds = progress_commands(&config, &move_ring(&config), 1.0);
        let shadow = cmds.iter().find_map(DrawCmd::as_circle).unwrap();

        let Paint::RadialGradient(g) = &shadow.paint else { panic!("shadow is not radial") };
        assert_eq!(g.radius, 43.0);
        assert!((g.stops[0].t - 32.0 / 43.0).abs() < EPS);
        assert_eq!(g.stops[0].color.to_srgb_u8(), [0, 0, 0, 255]);
        assert_eq!(g.stops[1].color.to_srgb_u8(), [0, 0, 0, 10]);
    }
}
