use core::ops::{Add, Mul, Sub};

/// 2D point/vector in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Point on the circle of `radius` around `center` at `angle`.
    ///
    /// With +Y down, increasing angles run clockwise on screen.
    #[inline]
    pub fn on_circle(center: Vec2, radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(center.x + radius * cos, center.y + radius * sin)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn on_circle_top_is_negative_y() {
        let c = Vec2::splat(100.0);
        assert!(close(Vec2::on_circle(c, 10.0, -FRAC_PI_2), Vec2::new(100.0, 90.0)));
    }

    #[test]
    fn on_circle_quarter_turn_is_clockwise() {
        let c = Vec2::splat(100.0);
        assert!(close(Vec2::on_circle(c, 10.0, 0.0), Vec2::new(110.0, 100.0)));
        assert!(close(Vec2::on_circle(c, 10.0, FRAC_PI_2), Vec2::new(100.0, 110.0)));
        assert!(close(Vec2::on_circle(c, 10.0, PI), Vec2::new(90.0, 100.0)));
    }
}
