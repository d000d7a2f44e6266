//! CPU rasterization into an RGBA8 framebuffer
//!
//! Row-major, one `[u8; 4]` per pixel, no stride padding (the layout
//! `pixels` hands out).

use glam::IVec2;

use super::Color;
use super::text::TextSurface;
use crate::sim::Rect;

/// Borrowed RGBA8 frame
pub struct FrameBuffer<'a> {
    pixels: &'a mut [[u8; 4]],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(pixels: &'a mut [[u8; 4]], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// View a raw byte frame (length must be `width * height * 4`)
    pub fn from_bytes(bytes: &'a mut [u8], width: u32, height: u32) -> Self {
        Self::new(bytemuck::cast_slice_mut(bytes), width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Read back a pixel (None outside the frame)
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[self.index(x, y)].into())
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.into());
    }

    /// Opaque fill, clipped to the frame
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = rect.intersection(&self.bounds()) else {
            return;
        };
        let rgba: [u8; 4] = color.into();
        for y in clip.y()..clip.bottom() {
            let start = self.index(clip.x(), y);
            self.pixels[start..start + clip.width() as usize].fill(rgba);
        }
    }

    /// Alpha-blend a text coverage mask in its color, clipped to the frame
    pub fn blit_text(&mut self, surface: &TextSurface, origin: IVec2) {
        let Some(clip) = surface.rect_at(origin).intersection(&self.bounds()) else {
            return;
        };
        let color = surface.color();
        for y in clip.y()..clip.bottom() {
            for x in clip.x()..clip.right() {
                let coverage = surface.coverage_at(x - origin.x, y - origin.y);
                if coverage == 0 {
                    continue;
                }
                let idx = self.index(x, y);
                self.pixels[idx] = blend(self.pixels[idx], color, coverage);
            }
        }
    }
}

/// Source-over blend of `color` scaled by `coverage`, result is opaque
fn blend(dst: [u8; 4], color: Color, coverage: u8) -> [u8; 4] {
    let alpha = coverage as u32 * color.a as u32 / 255;
    let mix = |src: u8, dst: u8| -> u8 {
        ((src as u32 * alpha + dst as u32 * (255 - alpha) + 127) / 255) as u8
    };
    [
        mix(color.r, dst[0]),
        mix(color.g, dst[1]),
        mix(color.b, dst[2]),
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32) -> Vec<u8> {
        vec![0; (width * height * 4) as usize]
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut bytes = frame(4, 3);
        let mut fb = FrameBuffer::from_bytes(&mut bytes, 4, 3);
        fb.clear(Color::WHITE);
        assert!(bytes.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_fill_rect_exact_extent() {
        let mut bytes = frame(10, 10);
        let mut fb = FrameBuffer::from_bytes(&mut bytes, 10, 10);
        fb.clear(Color::BLACK);
        fb.fill_rect(Rect::new(2, 3, 4, 2), Color::RED);

        assert_eq!(fb.pixel(2, 3), Some(Color::RED));
        assert_eq!(fb.pixel(5, 4), Some(Color::RED));
        assert_eq!(fb.pixel(6, 4), Some(Color::BLACK));
        assert_eq!(fb.pixel(2, 5), Some(Color::BLACK));
        assert_eq!(fb.pixel(1, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let mut bytes = frame(10, 10);
        let mut fb = FrameBuffer::from_bytes(&mut bytes, 10, 10);
        fb.fill_rect(Rect::new(-5, 8, 8, 20), Color::WHITE);
        assert_eq!(fb.pixel(0, 9), Some(Color::WHITE));
        assert_eq!(fb.pixel(2, 9), Some(Color::WHITE));
        assert_eq!(fb.pixel(3, 9), Some(Color::from([0, 0, 0, 0])));

        // Entirely outside: no panic, no change
        fb.fill_rect(Rect::new(20, 20, 5, 5), Color::RED);
        fb.fill_rect(Rect::new(3, 612, 20, 20), Color::RED);
        assert_eq!(fb.pixel(9, 9), Some(Color::from([0, 0, 0, 0])));
    }

    #[test]
    fn test_pixel_out_of_range() {
        let mut bytes = frame(2, 2);
        let fb = FrameBuffer::from_bytes(&mut bytes, 2, 2);
        assert_eq!(fb.pixel(-1, 0), None);
        assert_eq!(fb.pixel(2, 0), None);
        assert_eq!(fb.pixel(0, 2), None);
    }

    #[test]
    fn test_blit_text_blends_coverage() {
        let mut bytes = frame(4, 4);
        let mut fb = FrameBuffer::from_bytes(&mut bytes, 4, 4);
        fb.clear(Color::BLACK);

        // 2x1 mask: full then empty
        let surface = TextSurface::new(2, 1, Color::WHITE, vec![255, 0]);
        fb.blit_text(&surface, IVec2::new(1, 1));

        assert_eq!(fb.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(fb.pixel(2, 1), Some(Color::BLACK));
        assert_eq!(fb.pixel(0, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_blit_text_partial_coverage() {
        let mut bytes = frame(1, 1);
        let mut fb = FrameBuffer::from_bytes(&mut bytes, 1, 1);
        fb.clear(Color::WHITE);
        let surface = TextSurface::new(1, 1, Color::BLACK, vec![128]);
        fb.blit_text(&surface, IVec2::ZERO);

        let px = fb.pixel(0, 0).unwrap();
        assert!((126..=128).contains(&px.r));
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_blit_text_clipped() {
        let mut bytes = frame(3, 3);
        let mut fb = FrameBuffer::from_bytes(&mut bytes, 3, 3);
        fb.clear(Color::BLACK);
        let surface = TextSurface::new(2, 2, Color::RED, vec![255; 4]);
        fb.blit_text(&surface, IVec2::new(2, -1));
        assert_eq!(fb.pixel(2, 0), Some(Color::RED));
        assert_eq!(fb.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(fb.pixel(2, 1), Some(Color::BLACK));
    }
}
