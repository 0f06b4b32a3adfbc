//! Activity rings engine.
//!
//! Renders three concentric progress rings (stand, exercise, move) into a
//! PNG. Progress values are turned into renderer-agnostic draw commands by
//! [`rings`], rasterized on the CPU by [`render`], and encoded with `image`.
//!
//! ```rust,no_run
//! use rings_engine::paint::Color;
//! use rings_engine::rings::{ActivityValues, RingType, RingsCanvas, RingsConfig, DEFAULT_IMAGE_SIZE};
//!
//! let config = RingsConfig::default();
//! let mut canvas = RingsCanvas::new(&config, DEFAULT_IMAGE_SIZE, Color::black())?;
//! canvas.draw_activity(&ActivityValues::new().with(RingType::Move, 1.25));
//! canvas.save_png("rings.png")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod render;
pub mod rings;
pub mod swatch;
