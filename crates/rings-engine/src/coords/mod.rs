//! Coordinate and geometry types shared by the scene, the rasterizer and the rings.
//!
//! Canonical space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are radians measured clockwise from +X (so `-π/2` is 12 o'clock).

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
