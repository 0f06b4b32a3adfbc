/// Paint layer for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Canvas background fill.
    pub const BACKGROUND: ZIndex = ZIndex(0);
    /// Idle (inactive color) ring tracks.
    pub const TRACK: ZIndex = ZIndex(1);
    /// Progress arcs and their shadows.
    pub const PROGRESS: ZIndex = ZIndex(2);
}
