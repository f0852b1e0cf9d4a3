use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::color::Color;
use crate::error::{RenderError, RenderResult};

/// Fixed-size packed-ARGB pixel buffer. One render owns one canvas; draw calls
/// mutate it in place and `encode_png` converts it exactly once at the end.
#[derive(Debug)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

/// Fast approximation of `x / 255` for channel blending.
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let x = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((x + 1 + (x >> 8)) >> 8) as u8
}

impl PixelCanvas {
    /// Zero-filled (transparent black) canvas. Dimensions must be nonzero and
    /// even; social previews assume even-sided 16:9 frames.
    pub fn new(width: usize, height: usize) -> RenderResult<Self> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(RenderError::dimensions(format!(
                "canvas must have even, nonzero dimensions, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width * height],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Buffer offset of pixel (x, y).
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    /// Overwrite a contiguous run of pixels starting at a raw buffer offset.
    /// The fundamental primitive every renderer uses instead of per-pixel
    /// loops. Runs past the buffer end are truncated.
    #[inline]
    pub fn fill_span(&mut self, offset: usize, len: usize, color: Color) {
        if offset >= self.pixels.len() {
            return;
        }
        let end = (offset + len).min(self.pixels.len());
        self.pixels[offset..end].fill(color.to_argb());
    }

    /// Horizontal run starting at (x, y), clipped to the row.
    pub fn fill_row(&mut self, x: i32, y: i32, len: usize, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let start = x.max(0);
        let end = (x + len as i32).min(self.width as i32);
        if start >= end {
            return;
        }
        let offset = self.index(start as usize, y as usize);
        self.fill_span(offset, (end - start) as usize, color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: usize, h: usize, color: Color) {
        for row in 0..h as i32 {
            self.fill_row(x, y + row, w, color);
        }
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = self.index(x as usize, y as usize);
        self.pixels[i] = color.to_argb();
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(Color::from_argb(self.pixels[self.index(x as usize, y as usize)]))
    }

    /// Blend `color` over the existing pixel with the given coverage (0..=255).
    /// Full coverage overwrites; the result is always opaque.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = self.index(x as usize, y as usize);
        let dst = Color::from_argb(self.pixels[i]);
        let a = coverage as u16;
        let out = Color::rgb(
            blend_channel(color.r, dst.r, a),
            blend_channel(color.g, dst.g, a),
            blend_channel(color.b, dst.b, a),
        );
        self.pixels[i] = out.to_argb();
    }

    /// Encode the buffer as a PNG byte stream. The packed ARGB words are
    /// unpacked to R,G,B,A byte order here; this is the one place a channel
    /// swap would silently corrupt every image, so it is covered by a
    /// decode-back test.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &px in &self.pixels {
            let c = Color::from_argb(px);
            bytes.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(
                &bytes,
                self.width as u32,
                self.height as u32,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| RenderError::encode(format!("png encode: {}", e)))?;
        log::debug!(
            "encoded {}x{} canvas into {} png bytes",
            self.width,
            self.height,
            out.len()
        );
        Ok(out)
    }
}

/// Pad a content extent up to an even-sided 16:9 frame, the aspect ratio
/// social-media previews crop to.
pub fn fit_16x9(width: usize, height: usize) -> (usize, usize) {
    let (mut w, mut h) = (width, height);
    if w * 9 > h * 16 {
        h = (w as f64 / 16.0 * 9.0).round() as usize;
    } else {
        w = (h as f64 / 9.0 * 16.0).round() as usize;
    }
    if h % 2 == 1 {
        h += 1;
    }
    if w % 2 == 1 {
        w += 1;
    }
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_rejects_odd_dimensions() {
        let err = PixelCanvas::new(101, 100).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDimensions);
        let err = PixelCanvas::new(100, 99).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDimensions);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(PixelCanvas::new(0, 100).is_err());
        assert!(PixelCanvas::new(100, 0).is_err());
    }

    #[test]
    fn test_starts_transparent() {
        let canvas = PixelCanvas::new(4, 4).unwrap();
        assert!(canvas.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_fill_span_writes_run() {
        let mut canvas = PixelCanvas::new(8, 2).unwrap();
        let red = Color::rgb(255, 0, 0);
        canvas.fill_span(3, 4, red);
        for i in 0..16 {
            let expect = (3..7).contains(&i);
            assert_eq!(canvas.pixels()[i] == red.to_argb(), expect, "pixel {}", i);
        }
    }

    #[test]
    fn test_fill_span_truncates_at_end() {
        let mut canvas = PixelCanvas::new(4, 2).unwrap();
        canvas.fill_span(6, 100, Color::WHITE);
        assert_eq!(canvas.pixels()[7], Color::WHITE.to_argb());
        canvas.fill_span(800, 4, Color::WHITE); // out of range, no-op
    }

    #[test]
    fn test_fill_row_clips_horizontally() {
        let mut canvas = PixelCanvas::new(4, 2).unwrap();
        canvas.fill_row(-2, 0, 3, Color::WHITE);
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(1, 0), Some(Color::TRANSPARENT));
        // Negative start must not wrap into the previous row.
        canvas.fill_row(-2, 1, 1, Color::WHITE);
        assert_eq!(canvas.get_pixel(3, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_blend_full_coverage_overwrites() {
        let mut canvas = PixelCanvas::new(2, 2).unwrap();
        canvas.set_pixel(0, 0, Color::BLACK);
        canvas.blend_pixel(0, 0, Color::rgb(200, 100, 50), 255);
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::rgb(200, 100, 50)));
    }

    #[test]
    fn test_png_channel_order_survives_decode() {
        let mut canvas = PixelCanvas::new(4, 2).unwrap();
        canvas.clear(Color::BLACK);
        let c = Color::rgb(0x12, 0x34, 0x56);
        canvas.set_pixel(1, 0, c);
        let png = canvas.encode_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(1, 0).0, [0x12, 0x34, 0x56, 0xff]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0xff]);
    }

    #[test]
    fn test_fit_16x9_pads_short_dimension() {
        // Wider than 16:9: height grows.
        let (w, h) = fit_16x9(1600, 100);
        assert_eq!((w, h), (1600, 900));
        // Taller than 16:9: width grows.
        let (w, h) = fit_16x9(100, 900);
        assert_eq!((w, h), (1600, 900));
    }

    #[test]
    fn test_fit_16x9_yields_even_sides() {
        let (w, h) = fit_16x9(553, 311);
        assert_eq!(w % 2, 0);
        assert_eq!(h % 2, 0);
        assert!(w * 9 >= h * 16 - 32, "close to 16:9");
    }
}
