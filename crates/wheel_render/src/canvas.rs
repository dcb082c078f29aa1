//! CPU-side frame buffer
//!
//! Everything is drawn into a small RGBA [`Canvas`] at logical resolution,
//! then uploaded as a texture and scaled to the window in one blit.

use bytemuck::{Pod, Zeroable};

/// An sRGB colour with alpha, laid out exactly as a texel of an
/// `Rgba8Unorm(Srgb)` texture.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Convert to a wgpu clear colour (linear, as wgpu expects)
    pub fn to_wgpu_color(self) -> wgpu::Color {
        fn to_linear(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        wgpu::Color {
            r: to_linear(self.r),
            g: to_linear(self.g),
            b: to_linear(self.b),
            a: self.a as f64 / 255.0,
        }
    }
}

/// A fixed-size RGBA pixel buffer, row-major, top-left origin
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Canvas {
    /// Create a canvas cleared to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::default(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every pixel
    pub fn fill(&mut self, color: Rgba8) {
        self.pixels.fill(color);
    }

    /// Set one pixel; coordinates outside the canvas are clipped
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Read one pixel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Raw bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels equal to `color`
    pub fn count_color(&self, color: Rgba8) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_size() {
        assert_eq!(std::mem::size_of::<Rgba8>(), 4);
    }

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.pixels().len(), 12);
        assert_eq!(canvas.as_bytes().len(), 48);
    }

    #[test]
    fn test_put_pixel_clips() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_pixel(-1, 0, Rgba8::WHITE);
        canvas.put_pixel(0, 4, Rgba8::WHITE);
        canvas.put_pixel(4, 0, Rgba8::WHITE);
        assert_eq!(canvas.count_color(Rgba8::WHITE), 0);

        canvas.put_pixel(3, 3, Rgba8::WHITE);
        assert_eq!(canvas.pixel(3, 3), Some(Rgba8::WHITE));
        assert_eq!(canvas.count_color(Rgba8::WHITE), 1);
    }

    #[test]
    fn test_byte_layout() {
        let mut canvas = Canvas::new(2, 1);
        canvas.put_pixel(1, 0, Rgba8::new(1, 2, 3, 4));
        assert_eq!(canvas.as_bytes(), &[0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_color_endpoints() {
        let black = Rgba8::BLACK.to_wgpu_color();
        let white = Rgba8::WHITE.to_wgpu_color();
        assert_eq!(black.r, 0.0);
        assert!((white.g - 1.0).abs() < 1e-9);
        assert_eq!(white.a, 1.0);
    }
}
