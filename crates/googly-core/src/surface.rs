//! Drawing-surface contract between the animation core and its renderer.

use crate::geom::{Point, Rect, Rgb};

/// A surface the eye rig draws one frame onto.
///
/// The core only ever emits fills; it never reads pixels back.
/// Implementations are expected to clip out-of-bounds geometry, ignore empty
/// rects, and clamp corner radii to half of the shorter rect side.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Fill `rect` with its corners rounded to `radius`.
    fn fill_rounded_rect(&mut self, color: Rgb, rect: Rect, radius: i32);

    /// Fill the polygon outlined by `points`.
    fn fill_polygon(&mut self, color: Rgb, points: &[Point]);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    RoundedRect {
        color: Rgb,
        rect: Rect,
        radius: i32,
    },
    Polygon {
        color: Rgb,
        points: Vec<Point>,
    },
}

/// A [`Surface`] that records calls instead of rasterizing, for assertions
/// on what a frame drew.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// All rounded rects filled with `color`, in draw order.
    pub fn rects_with(&self, color: Rgb) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::RoundedRect { color: col, rect, .. } if *col == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Number of polygons filled with `color`.
    pub fn polygon_count(&self, color: Rgb) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Polygon { color: col, .. } if *col == color))
            .count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rounded_rect(&mut self, color: Rgb, rect: Rect, radius: i32) {
        self.calls.push(DrawCall::RoundedRect { color, rect, radius });
    }

    fn fill_polygon(&mut self, color: Rgb, points: &[Point]) {
        self.calls.push(DrawCall::Polygon {
            color,
            points: points.to_vec(),
        });
    }
}
