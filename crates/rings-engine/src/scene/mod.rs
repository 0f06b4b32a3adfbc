//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands (arcs, discs, rects)
//! - provide deterministic ordering (layer + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey};
pub use shapes::{ArcCmd, CircleCmd, RectCmd};
pub use z_index::ZIndex;
