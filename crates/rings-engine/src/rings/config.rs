use std::fmt;
use std::str::FromStr;

use crate::coords::Vec2;
use crate::paint::Color;

/// Default square image size the default geometry is laid out for.
pub const DEFAULT_IMAGE_SIZE: u32 = 782;

/// One of the three rings, innermost first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RingType {
    Stand,
    Exercise,
    Move,
}

impl RingType {
    pub const ALL: [RingType; 3] = [RingType::Stand, RingType::Exercise, RingType::Move];

    pub const fn name(self) -> &'static str {
        match self {
            RingType::Stand => "stand",
            RingType::Exercise => "exercise",
            RingType::Move => "move",
        }
    }
}

impl fmt::Display for RingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ring name that matches none of [`RingType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRingType(pub String);

impl fmt::Display for UnknownRingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown ring type `{}`", self.0)
    }
}

impl std::error::Error for UnknownRingType {}

impl FromStr for RingType {
    type Err = UnknownRingType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RingType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRingType(s.to_string()))
    }
}

/// Colors of one ring: idle track plus the start/end of the progress gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingStyle {
    pub kind: RingType,
    pub inactive: Color,
    pub start: Color,
    pub end: Color,
}

impl RingStyle {
    pub const fn new(kind: RingType, inactive: Color, start: Color, end: Color) -> Self {
        Self { kind, inactive, start, end }
    }

    pub const STAND: RingStyle = RingStyle::new(
        RingType::Stand,
        Color::from_srgb_u8(6, 27, 33, 255),
        Color::rgb(0.0, 0.7294117647, 0.8823529412),
        Color::rgb(0.0, 0.9803921569, 0.8156862745),
    );

    pub const EXERCISE: RingStyle = RingStyle::new(
        RingType::Exercise,
        Color::from_srgb_u8(14, 32, 3, 255),
        Color::rgb(0.2156862745, 0.862745098, 0.0),
        Color::rgb(0.7176470588, 1.0, 0.0),
    );

    pub const MOVE: RingStyle = RingStyle::new(
        RingType::Move,
        Color::from_srgb_u8(30, 1, 3, 255),
        Color::rgb(0.8823529412, 0.0, 0.07843137255),
        Color::rgb(1.0, 0.1960784314, 0.5294117647),
    );
}

/// Immutable ring layout and palette.
///
/// Built once and shared by reference; nothing mutates it while rendering.
/// The defaults are sized for [`DEFAULT_IMAGE_SIZE`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingsConfig {
    /// Stroke width of every ring.
    pub line_width: f32,
    /// Gap between neighbouring rings.
    pub ring_padding: f32,
    /// Radius of the empty disc inside the innermost ring.
    pub inner_radius: f32,
    /// Width of the soft rim of the overflow shadow.
    pub shadow_feather: f32,
    /// Ring styles, innermost first.
    pub rings: Vec<RingStyle>,
}

impl Default for RingsConfig {
    fn default() -> Self {
        Self {
            line_width: 86.0,
            ring_padding: 6.0,
            inner_radius: 115.0,
            shadow_feather: 11.0,
            rings: vec![RingStyle::STAND, RingStyle::EXERCISE, RingStyle::MOVE],
        }
    }
}

impl RingsConfig {
    pub fn style(&self, kind: RingType) -> Option<&RingStyle> {
        self.rings.iter().find(|s| s.kind == kind)
    }

    /// Centerline radius of the ring at `index` (0 = innermost).
    ///
    /// `radius(i + 1) == radius(i) + line_width + ring_padding`.
    pub fn radius(&self, index: usize) -> f32 {
        self.inner_radius + self.line_width / 2.0 + index as f32 * (self.line_width + self.ring_padding)
    }

    /// Resolves every configured ring around `center`.
    pub fn layout(&self, center: Vec2) -> Vec<Ring> {
        self.rings
            .iter()
            .enumerate()
            .map(|(i, style)| Ring {
                kind: style.kind,
                center,
                radius: self.radius(i),
                inactive: style.inactive,
                start: style.start,
                end: style.end,
            })
            .collect()
    }
}

/// A ring placed on a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ring {
    pub kind: RingType,
    pub center: Vec2,
    /// Distance from `center` to the stroke centerline.
    pub radius: f32,
    pub inactive: Color,
    pub start: Color,
    pub end: Color,
}
