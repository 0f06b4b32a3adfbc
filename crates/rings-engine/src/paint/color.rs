/// Straight-alpha sRGB color with `f32` channels in `[0, 1]`.
///
/// Channels are not premultiplied; the rasterizer premultiplies when it
/// builds shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Opaque color from `f32` channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub const fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Quantizes to sRGB bytes, rounding to nearest.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[inline]
fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Blends `start` toward `end` by `t`, channel by channel, at 8-bit precision.
///
/// `t` is clamped to `[0, 1]` (NaN counts as 0). Each channel is
/// `a + t * (b - a)` truncated toward the lower integer, so the result is
/// deterministic and never leaves the `[a, b]` range.
pub fn blend(start: Color, end: Color, t: f32) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let a = start.to_srgb_u8();
    let b = end.to_srgb_u8();

    let lerp = |i: usize| (a[i] as f32 + t * (b[i] as f32 - a[i] as f32)) as u8;

    Color::from_srgb_u8(lerp(0), lerp(1), lerp(2), lerp(3))
}
