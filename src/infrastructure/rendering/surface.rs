//! CPU raster surface - every pane draws by direct pixel writes.

use bytemuck::{Pod, Zeroable};

use super::font;

/// One RGBA pixel, tightly packed for host consumption
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
}

/// A caller-sized 2D raster surface for one pane.
///
/// Row-major, top-left origin. All primitives clip against the bounds so
/// renderers never have to.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RenderSurface {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self { width, height, pixels: vec![background; (width * height) as usize] }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major, for upload into a host texture
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
    }

    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
    }

    /// Source-over blend honoring the color's alpha
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if color.a == 255 {
            self.put_pixel(x, y, color);
            return;
        }
        if color.a == 0 {
            return;
        }
        if let Some(dst) = self.get(x, y) {
            let a = color.a as u32;
            let inv = 255 - a;
            let blend = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
            self.put_pixel(
                x,
                y,
                Rgba::new(
                    blend(color.r, dst.r),
                    blend(color.g, dst.g),
                    blend(color.b, dst.b),
                    255,
                ),
            );
        }
    }

    /// Filled axis-aligned rectangle, alpha-blended
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        for py in y..y + h {
            for px in x..x + w {
                self.blend_pixel(px, py, color);
            }
        }
    }

    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgba) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            self.blend_pixel(x, y, color);
        }
    }

    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgba) {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in lo..=hi {
            self.blend_pixel(x, y, color);
        }
    }

    /// 1-px Bresenham line between arbitrary points
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.blend_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled triangle via scanline over the bounding box
    pub fn fill_triangle(
        &mut self,
        (x0, y0): (i32, i32),
        (x1, y1): (i32, i32),
        (x2, y2): (i32, i32),
        color: Rgba,
    ) {
        let min_x = x0.min(x1).min(x2);
        let max_x = x0.max(x1).max(x2);
        let min_y = y0.min(y1).min(y2);
        let max_y = y0.max(y1).max(y2);

        let edge = |ax: i32, ay: i32, bx: i32, by: i32, px: i32, py: i32| -> i64 {
            (bx - ax) as i64 * (py - ay) as i64 - (by - ay) as i64 * (px - ax) as i64
        };

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let w0 = edge(x0, y0, x1, y1, px, py);
                let w1 = edge(x1, y1, x2, y2, px, py);
                let w2 = edge(x2, y2, x0, y0, px, py);
                let inside = (w0 >= 0 && w1 >= 0 && w2 >= 0) || (w0 <= 0 && w1 <= 0 && w2 <= 0);
                if inside {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    /// Render a text run with the built-in 5x7 bitmap font
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        let mut pen_x = x;
        for ch in text.chars() {
            if let Some(glyph) = font::glyph(ch) {
                for (row, bits) in glyph.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                            self.blend_pixel(pen_x + col as i32, y + row as i32, color);
                        }
                    }
                }
            }
            pen_x += font::GLYPH_WIDTH as i32 + 1;
        }
    }

    /// Pixel width of a text run in the built-in font
    pub fn text_width(text: &str) -> i32 {
        let chars = text.chars().count() as i32;
        if chars == 0 { 0 } else { chars * (font::GLYPH_WIDTH as i32 + 1) - 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let mut surface = RenderSurface::new(4, 4, BLACK);
        surface.put_pixel(-1, 0, WHITE);
        surface.put_pixel(0, 100, WHITE);
        surface.fill_rect(-5, -5, 20, 20, WHITE);
        assert!(surface.pixels().iter().all(|p| *p == WHITE));
    }

    #[test]
    fn byte_view_is_rgba_order() {
        let mut surface = RenderSurface::new(1, 1, BLACK);
        surface.put_pixel(0, 0, Rgba::new(1, 2, 3, 4));
        assert_eq!(surface.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn line_endpoints_are_painted() {
        let mut surface = RenderSurface::new(10, 10, BLACK);
        surface.line(1, 1, 8, 6, WHITE);
        assert_eq!(surface.get(1, 1), Some(WHITE));
        assert_eq!(surface.get(8, 6), Some(WHITE));
    }

    #[test]
    fn blend_half_alpha() {
        let mut surface = RenderSurface::new(1, 1, BLACK);
        surface.blend_pixel(0, 0, Rgba::new(255, 255, 255, 128));
        let px = surface.get(0, 0).unwrap();
        assert!(px.r > 120 && px.r < 136);
    }

    #[test]
    fn text_marks_pixels() {
        let mut surface = RenderSurface::new(40, 10, BLACK);
        surface.draw_text(0, 0, "0.5", WHITE);
        assert!(surface.pixels().iter().any(|p| *p == WHITE));
        assert_eq!(RenderSurface::text_width("AB"), 11);
    }
}
