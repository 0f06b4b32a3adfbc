//! Activity rings: ring model, sweep gradients, segment renderer, canvas.
//!
//! A progress value is decomposed into half-circle segments (0.5 goal units
//! each). Segments alternate between starting at 12 and 6 o'clock so each one
//! can be stroked with a straight vertical gradient; colors continue across
//! the seam because every segment starts where the previous one stopped.

mod canvas;
mod config;
mod gradient;
mod segments;
mod values;

pub use canvas::{render_png, RingsCanvas};
pub use config::{Ring, RingStyle, RingType, RingsConfig, UnknownRingType, DEFAULT_IMAGE_SIZE};
pub use gradient::{ring_gradient, SweepDirection};
pub use segments::{progress_commands, render_progress, shadow_angle, SEGMENT_SPAN, SHADOW_ANGLE_OFFSET};
pub use values::ActivityValues;
