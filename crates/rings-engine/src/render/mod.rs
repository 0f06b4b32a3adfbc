//! CPU rasterization subsystem.
//!
//! `Surface` consumes `scene` draw streams and rasterizes them into an RGBA
//! pixmap (tiny-skia), then serializes the pixels as PNG (`image`).
//!
//! Convention:
//! - geometry is in pixels (top-left origin, +Y down)
//! - arcs are flattened to cubic Béziers before stroking

mod path;
mod shader;
mod surface;

pub use path::{arc_beziers, CubicSegment};
pub use surface::Surface;
