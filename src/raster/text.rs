use noto_sans_mono_bitmap::{get_raster, get_raster_width, FontWeight, RasterHeight};

use crate::color::Color;
use crate::raster::canvas::PixelCanvas;

/// Horizontal anchor of a text run relative to its x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text run relative to its y position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

/// Text sizes used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Labels and footers.
    Body,
    /// Chart headers.
    Heading,
}

impl TextSize {
    fn raster_height(self) -> RasterHeight {
        match self {
            TextSize::Body => RasterHeight::Size16,
            TextSize::Heading => RasterHeight::Size20,
        }
    }

    /// Line height in pixels.
    pub fn height(self) -> usize {
        match self {
            TextSize::Body => 16,
            TextSize::Heading => 20,
        }
    }
}

/// Monospace text placement over a canvas. Glyphs come from the compiled-in
/// Noto Sans Mono rasters and are blended by coverage, so text stays readable
/// over both the flat chart backgrounds and the dot matrix.
pub struct TextOverlay;

impl TextOverlay {
    /// Advance width of one glyph at `size`.
    pub fn glyph_width(size: TextSize) -> usize {
        get_raster_width(FontWeight::Regular, size.raster_height())
    }

    /// Pixel width of `text` at `size`.
    pub fn measure(text: &str, size: TextSize) -> usize {
        Self::glyph_width(size) * text.chars().count()
    }

    /// Draw `text` anchored at (x, y). Characters without a glyph in the
    /// compiled tables fall back to `?`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        canvas: &mut PixelCanvas,
        text: &str,
        x: i32,
        y: i32,
        size: TextSize,
        color: Color,
        align: Align,
        baseline: Baseline,
    ) {
        let width = Self::measure(text, size) as i32;
        let height = size.height() as i32;
        let x0 = match align {
            Align::Left => x,
            Align::Center => x - width / 2,
            Align::Right => x - width,
        };
        let y0 = match baseline {
            Baseline::Top => y,
            Baseline::Middle => y - height / 2,
            Baseline::Bottom => y - height,
        };

        let advance = Self::glyph_width(size) as i32;
        let raster_height = size.raster_height();
        let mut pen_x = x0;
        for ch in text.chars() {
            let glyph = get_raster(ch, FontWeight::Regular, raster_height)
                .or_else(|| get_raster('?', FontWeight::Regular, raster_height));
            if let Some(glyph) = glyph {
                for (row, line) in glyph.raster().iter().enumerate() {
                    for (col, &coverage) in line.iter().enumerate() {
                        if coverage > 0 {
                            canvas.blend_pixel(
                                pen_x + col as i32,
                                y0 + row as i32,
                                color,
                                coverage,
                            );
                        }
                    }
                }
            }
            pen_x += advance;
        }
    }
}
