//! Gradient preview sheet: one column per ring, twelve color steps each.

use anyhow::Result;

use crate::coords::Rect;
use crate::paint::{blend, Color, Paint};
use crate::render::Surface;
use crate::rings::{RingStyle, RingsConfig};
use crate::scene::{DrawList, ZIndex};

/// Edge length of one swatch cell.
pub const SWATCH_SIZE: u32 = 20;
/// Cells per column.
pub const SWATCH_ROWS: u32 = 12;

/// Colors for one column, top to bottom.
///
/// Row 0 is the start color and row `r` is `blend(start, end, (r - 1) / 12)`,
/// so the column lags one step behind the gradient and never reaches `end`.
pub fn swatch_colors(style: &RingStyle) -> Vec<Color> {
    (0..SWATCH_ROWS)
        .map(|row| match row {
            0 => style.start,
            r => blend(style.start, style.end, (r - 1) as f32 / SWATCH_ROWS as f32),
        })
        .collect()
}

/// Records the sheet's cells: columns in ring order.
pub fn record_swatches(list: &mut DrawList, config: &RingsConfig) {
    let cell = SWATCH_SIZE as f32;
    for (col, style) in config.rings.iter().enumerate() {
        for (row, color) in swatch_colors(style).into_iter().enumerate() {
            let rect = Rect::new(col as f32 * cell, row as f32 * cell, cell, cell);
            list.push_fill_rect(ZIndex::BACKGROUND, rect, Paint::solid(color));
        }
    }
}

/// Rasterizes the sheet on a transparent surface sized to fit it.
pub fn render_swatches(config: &RingsConfig) -> Result<Surface> {
    let width = SWATCH_SIZE * config.rings.len() as u32;
    let mut surface = Surface::new(width, SWATCH_SIZE * SWATCH_ROWS)?;

    let mut list = DrawList::new();
    record_swatches(&mut list, config);
    surface.draw(&list);
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_starts_at_start_color_and_repeats_it_once() {
        let colors = swatch_colors(&RingStyle::STAND);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0], RingStyle::STAND.start);
        assert_eq!(colors[1].to_srgb_u8(), RingStyle::STAND.start.to_srgb_u8());
        assert_ne!(colors[11].to_srgb_u8(), RingStyle::STAND.end.to_srgb_u8());
    }

    #[test]
    fn sheet_has_one_column_per_ring() {
        let config = RingsConfig::default();
        let surface = render_swatches(&config).unwrap();
        assert_eq!((surface.width(), surface.height()), (60, 240));

        // Top-left cell of each column is that ring's start color.
        for (col, style) in config.rings.iter().enumerate() {
            let px = surface.pixel(col as u32 * SWATCH_SIZE + 10, 10).unwrap();
            assert_eq!(px, style.start.to_srgb_u8());
        }
    }
}
