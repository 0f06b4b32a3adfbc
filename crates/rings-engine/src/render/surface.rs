use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use resvg::tiny_skia::{self, FillRule, LineCap, PathBuilder, Pixmap, Stroke, Transform};

use crate::scene::{ArcCmd, CircleCmd, DrawCmd, DrawList, RectCmd};

use super::path::arc_path;
use super::shader::resolve_paint;

/// Rectangular RGBA raster the draw stream is rasterized into.
///
/// Pixels start fully transparent. Drawing composites source-over with
/// anti-aliasing; encoding never mutates the pixels, so repeated encodes
/// without intervening draws produce identical bytes.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "surface has zero size ({width}x{height})");
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} surface"))?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Rasterizes every item of `list` in paint order.
    pub fn draw(&mut self, list: &DrawList) {
        for item in list.in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => self.fill_rect(cmd),
                DrawCmd::Arc(cmd) => self.stroke_arc(cmd),
                DrawCmd::Circle(cmd) => self.fill_circle(cmd),
            }
        }
    }

    fn fill_rect(&mut self, cmd: &RectCmd) {
        let r = cmd.rect;
        let Some(rect) = tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y) else {
            log::debug!("skipping invalid rect {r:?}");
            return;
        };
        let paint = sk_paint(&cmd.paint);
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn stroke_arc(&mut self, cmd: &ArcCmd) {
        if cmd.width <= 0.0 {
            return;
        }
        let Some(path) = arc_path(cmd.center, cmd.radius, cmd.start_angle, cmd.end_angle) else {
            log::debug!("skipping degenerate arc {:.3}..{:.3}", cmd.start_angle, cmd.end_angle);
            return;
        };
        let stroke = Stroke {
            width: cmd.width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        let paint = sk_paint(&cmd.paint);
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill_circle(&mut self, cmd: &CircleCmd) {
        let Some(path) = PathBuilder::from_circle(cmd.center.x, cmd.center.y, cmd.radius) else {
            log::debug!("skipping degenerate circle r={}", cmd.radius);
            return;
        };
        let paint = sk_paint(&cmd.paint);
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Straight-alpha RGBA of the pixel at `(x, y)`, if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Straight-alpha RGBA8 buffer, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Encodes the current pixels as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        PngEncoder::new(writer)
            .write_image(&self.to_rgba8(), self.width(), self.height(), ExtendedColorType::Rgba8)
            .context("failed to encode PNG")
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_png(&mut buf)?;
        Ok(buf)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_png(&mut writer)?;
        writer.flush().with_context(|| format!("failed to write {}", path.display()))
    }
}

fn sk_paint(paint: &crate::paint::Paint) -> tiny_skia::Paint<'static> {
    tiny_skia::Paint {
        shader: resolve_paint(paint),
        anti_alias: true,
        ..tiny_skia::Paint::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, Paint};
    use crate::scene::ZIndex;

    #[test]
    fn zero_size_is_rejected() {
        assert!(Surface::new(0, 10).is_err());
    }

    #[test]
    fn new_surface_is_transparent() {
        let s = Surface::new(4, 4).unwrap();
        assert_eq!(s.pixel(2, 2), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(4, 0), None);
        assert_eq!(s.pixel(0, 4), None);
    }

    #[test]
    fn pixel_past_right_edge_does_not_wrap() {
        let mut s = Surface::new(4, 4).unwrap();
        let mut list = DrawList::new();
        list.push_fill_rect(ZIndex::BACKGROUND, Rect::new(0.0, 1.0, 4.0, 1.0), Paint::solid(Color::black()));
        s.draw(&list);

        assert_eq!(s.pixel(0, 1), Some([0, 0, 0, 255]));
        assert_eq!(s.pixel(4, 0), None);
    }

    #[test]
    fn rect_fill_covers_pixels() {
        let mut s = Surface::new(8, 8).unwrap();
        let mut list = DrawList::new();
        list.push_fill_rect(ZIndex::BACKGROUND, Rect::from_size(8.0, 8.0), Paint::solid(Color::from_srgb_u8(10, 20, 30, 255)));
        s.draw(&list);
        assert_eq!(s.pixel(0, 0), Some([10, 20, 30, 255]));
        assert_eq!(s.pixel(7, 7), Some([10, 20, 30, 255]));
    }

    #[test]
    fn ring_stroke_hits_centerline_but_not_center() {
        let mut s = Surface::new(100, 100).unwrap();
        let mut list = DrawList::new();
        list.push_ring(ZIndex::TRACK, Vec2::splat(50.0), 30.0, 10.0, Paint::solid(Color::rgb(1.0, 0.0, 0.0)));
        s.draw(&list);
        assert_eq!(s.pixel(50, 20), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel(80, 50), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel(50, 50), Some([0, 0, 0, 0]));
    }

    #[test]
    fn png_encoding_is_stable_and_decodable() {
        let mut s = Surface::new(16, 16).unwrap();
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::PROGRESS, Vec2::splat(8.0), 5.0, Color::rgb(0.0, 1.0, 0.0));
        s.draw(&list);

        let a = s.encode_png().unwrap();
        let b = s.encode_png().unwrap();
        assert_eq!(a, b);

        let decoded = image::load_from_memory(&a).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.get_pixel(8, 8).0, [0, 255, 0, 255]);
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let s = Surface::new(2, 2).unwrap();
        assert!(s.save_png("/nonexistent-dir/for/sure/out.png").is_err());
    }
}
