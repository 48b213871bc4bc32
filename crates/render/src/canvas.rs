use std::path::Path;

use anyhow::{Context, Result};

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed-size RGBA8 framebuffer with clipped primitive rasterizers.
///
/// Coordinates follow the usual screen convention: the origin is the top
/// left corner and y grows downward. Every primitive clips itself against
/// the canvas bounds, so callers may draw partially (or fully) off-screen.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Creates a black canvas of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel data, row-major from the top-left corner.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at a pixel, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        Some(Color::rgb(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = 0xff;
    }

    /// Fills the whole canvas with one color.
    pub fn fill(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = 0xff;
        }
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i32).min(self.width as i32);
        let y1 = (y + height as i32).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Outlines an axis-aligned rectangle with the given border thickness.
    pub fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, thickness: u32, color: Color) {
        let t = thickness.min(width).min(height);
        self.fill_rect(x, y, width, t, color);
        self.fill_rect(x, y + (height - t) as i32, width, t, color);
        self.fill_rect(x, y, t, height, color);
        self.fill_rect(x + (width - t) as i32, y, t, height, color);
    }

    /// Draws a line segment of the given thickness as a filled quad.
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            self.fill_circle(x0, y0, thickness / 2.0, color);
            return;
        }
        let nx = -dy / len * thickness / 2.0;
        let ny = dx / len * thickness / 2.0;
        let a = (x0 + nx, y0 + ny);
        let b = (x1 + nx, y1 + ny);
        let c = (x1 - nx, y1 - ny);
        let d = (x0 - nx, y0 - ny);
        self.fill_triangle(a, b, c, color);
        self.fill_triangle(a, c, d, color);
    }

    /// Fills a circle centered at `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let r2 = radius * radius;
        let x0 = (cx - radius).floor() as i32;
        let x1 = (cx + radius).ceil() as i32;
        let y0 = (cy - radius).floor() as i32;
        let y1 = (cy + radius).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }

    /// Fills a triangle with vertices in any winding order.
    pub fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Color) {
        let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };
        let area = edge(a, b, c.0, c.1);
        if area.abs() < f32::EPSILON {
            return;
        }
        let x0 = a.0.min(b.0).min(c.0).floor() as i32;
        let x1 = a.0.max(b.0).max(c.0).ceil() as i32;
        let y0 = a.1.min(b.1).min(c.1).floor() as i32;
        let y1 = a.1.max(b.1).max(c.1).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let x = px as f32 + 0.5;
                let y = py as f32 + 0.5;
                let w0 = edge(a, b, x, y) / area;
                let w1 = edge(b, c, x, y) / area;
                let w2 = edge(c, a, x, y) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }

    /// Writes the canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
        .with_context(|| format!("failed to write frame to {}", path.display()))?;
        Ok(())
    }
}
