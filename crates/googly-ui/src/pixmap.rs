//! Software rasterizer backing the eye rig's drawing surface.

use googly_core::{Point, Rect, Rgb, Surface};

/// An RGBA pixel buffer the rig draws each frame onto.
///
/// Row-major, 4 bytes per pixel, always fully opaque. All primitives clip
/// to the buffer; degenerate inputs (empty rects, sub-triangle polygons)
/// are skipped rather than treated as errors.
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, length `width * height * 4`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel; `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgb(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Fill pixels `[x0, x1)` on row `y`, clipped to the buffer.
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Rgb) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32);
        if x0 >= x1 {
            return;
        }
        let row = (y as usize) * (self.width as usize);
        for x in x0..x1 {
            let idx = (row + x as usize) * 4;
            self.data[idx] = color.0;
            self.data[idx + 1] = color.1;
            self.data[idx + 2] = color.2;
            self.data[idx + 3] = 255;
        }
    }
}

/// Horizontal inset of a quarter-circle corner at `dy` rows into the arc
/// (`dy = r` at the outermost row, `1` at the innermost).
fn corner_inset(dy: i32, r: i32) -> i32 {
    let fy = dy as f32 - 0.5;
    let fx = ((r * r) as f32 - fy * fy).max(0.0).sqrt();
    (r as f32 - fx).round() as i32
}

impl Surface for Pixmap {
    fn clear(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.0;
            px[1] = color.1;
            px[2] = color.2;
            px[3] = 255;
        }
    }

    fn fill_rounded_rect(&mut self, color: Rgb, rect: Rect, radius: i32) {
        if rect.is_empty() {
            return;
        }
        let r = radius.clamp(0, rect.w.min(rect.h) / 2);
        for row in rect.y..rect.y + rect.h {
            let dy = if row < rect.y + r {
                r - (row - rect.y)
            } else if row >= rect.y + rect.h - r {
                row - (rect.y + rect.h - r) + 1
            } else {
                0
            };
            let inset = if dy > 0 { corner_inset(dy, r) } else { 0 };
            self.fill_span(row, rect.x + inset, rect.x + rect.w - inset, color);
        }
    }

    fn fill_polygon(&mut self, color: Rgb, points: &[Point]) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            // Sample at the pixel-row center so edges landing exactly on
            // integer rows are counted once.
            let yc = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                let (ay, by) = (a.y as f32, b.y as f32);
                if (ay <= yc && by > yc) || (by <= yc && ay > yc) {
                    let t = (yc - ay) / (by - ay);
                    crossings.push(a.x as f32 + t * (b.x - a.x) as f32);
                }
            }
            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i32;
                let x1 = (pair[1] - 0.5).ceil() as i32;
                self.fill_span(y, x0, x1, color);
            }
        }
    }
}
