use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::render::Surface;
use crate::scene::{DrawList, ZIndex};

use super::segments::render_progress;
use super::{ActivityValues, Ring, RingType, RingsConfig};

/// Square drawing surface holding the three rings.
///
/// Construction paints the background and every ring's idle track; each
/// [`draw_activity`](Self::draw_activity) call then layers progress arcs on
/// top. One canvas serves one render.
pub struct RingsCanvas<'a> {
    config: &'a RingsConfig,
    rings: BTreeMap<RingType, Ring>,
    surface: Surface,
    pending: DrawList,
}

impl<'a> RingsCanvas<'a> {
    /// Creates a `size`×`size` canvas filled with `background`, rings idle.
    pub fn new(config: &'a RingsConfig, size: u32, background: Color) -> Result<Self> {
        let surface = Surface::new(size, size)?;
        let center = Vec2::splat(size as f32 / 2.0);
        let rings = config.layout(center).into_iter().map(|r| (r.kind, r)).collect();

        let mut canvas = Self { config, rings, surface, pending: DrawList::new() };
        canvas.draw_idle(background);
        Ok(canvas)
    }

    fn draw_idle(&mut self, background: Color) {
        let extent = self.surface.width() as f32;
        self.pending.push_fill_rect(
            ZIndex::BACKGROUND,
            Rect::from_size(extent, extent),
            Paint::solid(background),
        );

        for ring in self.rings.values() {
            self.pending.push_ring(
                ZIndex::TRACK,
                ring.center,
                ring.radius,
                self.config.line_width,
                Paint::solid(ring.inactive),
            );
        }
        self.flush();
    }

    /// Draws progress for every ring in `values`.
    ///
    /// Ring types this canvas was not configured with are ignored.
    pub fn draw_activity(&mut self, values: &ActivityValues) {
        for (kind, value) in values.iter() {
            let Some(ring) = self.rings.get(&kind) else {
                log::debug!("no {kind} ring on this canvas; ignoring value {value}");
                continue;
            };
            render_progress(&mut self.pending, self.config, ring, value);
        }
        self.flush();
    }

    fn flush(&mut self) {
        log::debug!("rasterizing {} draw items", self.pending.len());
        self.surface.draw(&self.pending);
        self.pending.clear();
    }

    pub fn ring(&self, kind: RingType) -> Option<&Ring> {
        self.rings.get(&kind)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        self.surface.write_png(writer)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.surface.encode_png()
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.surface.save_png(path)
    }
}

/// One-shot render: fresh canvas, draw `values`, encode as PNG.
pub fn render_png(config: &RingsConfig, size: u32, background: Color, values: &ActivityValues) -> Result<Vec<u8>> {
    let mut canvas = RingsCanvas::new(config, size, background)?;
    canvas.draw_activity(values);
    canvas.encode_png()
}
