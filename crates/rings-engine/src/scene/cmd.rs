use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::Surface` to rasterize it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Arc(ArcCmd),
    Circle(CircleCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_arc(&self) -> Option<&ArcCmd> {
        match self {
            DrawCmd::Arc(arc) => Some(arc),
            _ => None,
        }
    }

    #[inline]
    pub fn as_circle(&self) -> Option<&CircleCmd> {
        match self {
            DrawCmd::Circle(circle) => Some(circle),
            _ => None,
        }
    }
}
