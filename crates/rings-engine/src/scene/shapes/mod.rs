pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod rect;

pub use arc::ArcCmd;
pub use circle::CircleCmd;
pub use rect::RectCmd;
