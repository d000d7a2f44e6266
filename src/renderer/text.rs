//! HUD text rasterization
//!
//! A `TextSurface` is a single line of anti-aliased glyph coverage plus the
//! color to blend it in. `TextRasterizer` builds one with fontdue.

use std::path::Path;

use fontdue::{Font, FontSettings, Metrics};
use glam::IVec2;

use super::Color;
use crate::error::{RenderError, SetupError};
use crate::sim::Rect;

/// Largest text surface edge we will allocate
pub const MAX_TEXT_EXTENT: u32 = 4096;

/// Rendered line of text (8-bit coverage mask, row-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    width: u32,
    height: u32,
    color: Color,
    coverage: Vec<u8>,
}

impl TextSurface {
    pub fn new(width: u32, height: u32, color: Color, coverage: Vec<u8>) -> Self {
        debug_assert_eq!(coverage.len(), width as usize * height as usize);
        Self {
            width,
            height,
            color,
            coverage,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Destination rectangle when drawn at `origin`
    pub fn rect_at(&self, origin: IVec2) -> Rect {
        Rect::new(origin.x, origin.y, self.width as i32, self.height as i32)
    }

    /// Coverage at surface-local coordinates (0 outside)
    pub fn coverage_at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.coverage[y as usize * self.width as usize + x as usize]
    }
}

/// A loaded font at a fixed pixel size
pub struct TextRasterizer {
    font: Font,
    px: f32,
}

impl TextRasterizer {
    /// Read and parse a TTF/OTF file
    pub fn load(path: &Path, px: f32) -> Result<Self, SetupError> {
        let bytes = std::fs::read(path).map_err(|source| SetupError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let rasterizer = Self::from_bytes(bytes, px).map_err(|reason| SetupError::FontParse {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!("Loaded font {} at {}px", path.display(), px);
        Ok(rasterizer)
    }

    /// Parse font data already in memory
    pub fn from_bytes(bytes: Vec<u8>, px: f32) -> Result<Self, String> {
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(str::to_string)?;
        Ok(Self { font, px })
    }

    /// Lay out and rasterize one line of text
    pub fn render(&self, text: &str, color: Color) -> Result<TextSurface, RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyText);
        }
        let line = self
            .font
            .horizontal_line_metrics(self.px)
            .ok_or(RenderError::NoLineMetrics)?;
        let ascent = line.ascent.ceil() as i32;
        let height = (line.ascent - line.descent).ceil().max(0.0) as u32;

        let mut glyphs: Vec<(i32, Metrics, Vec<u8>)> = Vec::with_capacity(text.len());
        let mut pen = 0.0f32;
        let mut right = 0i32;
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, self.px);
            let x = pen.round() as i32 + metrics.xmin;
            right = right.max(x + metrics.width as i32);
            pen += metrics.advance_width;
            glyphs.push((x, metrics, bitmap));
        }
        let width = right.max(pen.ceil() as i32).max(0) as u32;

        if width == 0 || height == 0 {
            return Err(RenderError::EmptyText);
        }
        if width > MAX_TEXT_EXTENT || height > MAX_TEXT_EXTENT {
            return Err(RenderError::TextTooLarge {
                width,
                height,
                max: MAX_TEXT_EXTENT,
            });
        }

        let mut coverage = vec![0u8; width as usize * height as usize];
        for (x0, metrics, bitmap) in glyphs {
            // fontdue's ymin is the bitmap's bottom edge relative to the baseline
            let top = ascent - (metrics.ymin + metrics.height as i32);
            for row in 0..metrics.height {
                let y = top + row as i32;
                if y < 0 || y >= height as i32 {
                    continue;
                }
                for col in 0..metrics.width {
                    let x = x0 + col as i32;
                    if x < 0 || x >= width as i32 {
                        continue;
                    }
                    let idx = y as usize * width as usize + x as usize;
                    coverage[idx] = coverage[idx].max(bitmap[row * metrics.width + col]);
                }
            }
        }

        Ok(TextSurface::new(width, height, color, coverage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_coverage_lookup() {
        let surface = TextSurface::new(3, 2, Color::WHITE, vec![0, 10, 20, 30, 40, 50]);
        assert_eq!(surface.coverage_at(1, 0), 10);
        assert_eq!(surface.coverage_at(2, 1), 50);
        assert_eq!(surface.coverage_at(3, 0), 0);
        assert_eq!(surface.coverage_at(0, -1), 0);
        assert_eq!(surface.rect_at(IVec2::new(10, 10)), Rect::new(10, 10, 3, 2));
    }

    #[test]
    fn test_missing_font_is_setup_error() {
        let result = TextRasterizer::load(Path::new("no/such/font.ttf"), 24.0);
        assert!(matches!(result, Err(SetupError::FontRead { .. })));
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let result = TextRasterizer::from_bytes(vec![0xde, 0xad, 0xbe, 0xef], 24.0);
        assert!(result.is_err());
    }

    const FONT: &[u8] = include_bytes!("../../assets/fonts/Cantarell-Regular.ttf");

    fn rasterizer() -> TextRasterizer {
        TextRasterizer::from_bytes(FONT.to_vec(), 24.0).unwrap()
    }

    fn inked_rows(surface: &TextSurface) -> Vec<i32> {
        (0..surface.height() as i32)
            .filter(|&y| (0..surface.width() as i32).any(|x| surface.coverage_at(x, y) > 0))
            .collect()
    }

    #[test]
    fn test_render_hud_line() {
        let surface = rasterizer().render("Hit number: 0", Color::WHITE).unwrap();

        assert!(surface.width() > 0 && surface.width() < 24 * 13);
        assert!(surface.height() >= 20 && surface.height() < 48);
        assert_eq!(surface.color(), Color::WHITE);
        assert!(!inked_rows(&surface).is_empty());
    }

    #[test]
    fn test_glyphs_sit_on_the_baseline() {
        let rasterizer = rasterizer();
        let line = rasterizer.font.horizontal_line_metrics(24.0).unwrap();
        let baseline = line.ascent.ceil() as i32;

        // No descenders: ink stays above the baseline (1px of anti-aliasing allowed)
        let caps = rasterizer.render("Hit number: 0", Color::WHITE).unwrap();
        let rows = inked_rows(&caps);
        assert!(rows.iter().all(|&y| y <= baseline));
        assert!(rows.iter().any(|&y| y < baseline / 2));

        let descenders = rasterizer.render("gy", Color::WHITE).unwrap();
        assert!(inked_rows(&descenders).iter().any(|&y| y > baseline + 1));
    }

    #[test]
    fn test_longer_count_is_wider() {
        let rasterizer = rasterizer();
        let short = rasterizer.render("Hit number: 9", Color::BLACK).unwrap();
        let long = rasterizer.render("Hit number: 99", Color::BLACK).unwrap();
        assert!(long.width() > short.width());
        assert_eq!(long.height(), short.height());
    }

    #[test]
    fn test_empty_text_is_render_error() {
        assert!(matches!(
            rasterizer().render("", Color::WHITE),
            Err(RenderError::EmptyText)
        ));
    }
}
