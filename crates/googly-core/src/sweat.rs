//! Self-resetting sweat droplets.
//!
//! Three droplets fall independently, each confined to its own horizontal
//! band (left, center, right third of the screen). A droplet grows while
//! falling through the first half of its range, shrinks through the second,
//! and respawns at the top of a new random column once it passes its floor.

use rand::Rng;

use crate::geom::Rect;

/// Corner radius used when drawing droplets.
pub const DROPLET_RADIUS: i32 = 16;

const RESPAWN_Y: f32 = 16.0;
const FALL_STEP: f32 = 0.5;
const GROW_STEP: f32 = 0.5;
const SHRINK_W: f32 = 0.1;
const SHRINK_H: f32 = 0.5;
const MIN_SIZE: f32 = 0.8;
const SPAWN_W: f32 = 8.0;
const SPAWN_H: f32 = 16.0;
const FLOOR_MIN: i32 = 80;
const FLOOR_MAX: i32 = 160;

/// One falling droplet.
#[derive(Debug, Clone)]
pub struct Droplet {
    band: (i32, i32),
    anchor_x: i32,
    y: f32,
    y_max: f32,
    width: f32,
    height: f32,
}

impl Droplet {
    fn new(band: (i32, i32)) -> Self {
        Self {
            band,
            anchor_x: RESPAWN_Y as i32,
            y: RESPAWN_Y,
            y_max: FLOOR_MAX as f32,
            width: SPAWN_W,
            height: SPAWN_H,
        }
    }

    /// Advance one frame: fall, then grow or shrink around the midpoint of
    /// the fall range; respawn once past the floor.
    fn step(&mut self, rng: &mut impl Rng) {
        if self.y <= self.y_max {
            self.y += FALL_STEP;
        } else {
            self.anchor_x = rng.gen_range(self.band.0..=self.band.1);
            self.y = RESPAWN_Y;
            self.y_max = rng.gen_range(FLOOR_MIN..=FLOOR_MAX) as f32;
            self.width = SPAWN_W;
            self.height = SPAWN_H;
        }

        if self.y <= self.y_max / 2.0 {
            self.width += GROW_STEP;
            self.height += GROW_STEP;
        } else {
            self.width = (self.width - SHRINK_W).max(MIN_SIZE);
            self.height = (self.height - SHRINK_H).max(MIN_SIZE);
        }
    }

    /// Draw rect, centered on the anchor column, at least one pixel each way.
    pub fn rect(&self) -> Rect {
        let x = self.anchor_x as f32 - self.width / 2.0;
        Rect::new(
            x as i32,
            self.y as i32,
            (self.width as i32).max(1),
            (self.height as i32).max(1),
        )
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn y_max(&self) -> f32 {
        self.y_max
    }
}

/// The three-droplet particle system.
#[derive(Debug, Clone)]
pub struct SweatSystem {
    droplets: [Droplet; 3],
}

impl SweatSystem {
    /// Bands cover the left edge, the middle, and the right edge of a screen
    /// of the given width. Degenerate bands collapse on narrow screens
    /// instead of inverting.
    pub fn new(screen_w: i32) -> Self {
        let third = 240;
        let mid_hi = (screen_w - third).max(third);
        let right_lo = (screen_w - third).max(0);
        Self {
            droplets: [
                Droplet::new((0, third)),
                Droplet::new((third.min(mid_hi), mid_hi)),
                Droplet::new((right_lo, right_lo + third)),
            ],
        }
    }

    pub fn step(&mut self, rng: &mut impl Rng) {
        for d in &mut self.droplets {
            d.step(rng);
        }
    }

    pub fn droplets(&self) -> &[Droplet] {
        &self.droplets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn droplet_falls_half_pixel_per_frame() {
        let mut d = Droplet::new((0, 240));
        let mut rng = StdRng::seed_from_u64(1);
        let y0 = d.y();
        d.step(&mut rng);
        assert_eq!(d.y(), y0 + 0.5);
    }

    #[test]
    fn grows_then_shrinks_around_midpoint() {
        let mut d = Droplet::new((0, 240));
        let mut rng = StdRng::seed_from_u64(1);

        d.step(&mut rng);
        assert_eq!(d.width, SPAWN_W + GROW_STEP);
        assert_eq!(d.height, SPAWN_H + GROW_STEP);

        // Drive past the midpoint of the fall range.
        while d.y() <= d.y_max() / 2.0 {
            d.step(&mut rng);
        }
        let (w, h) = (d.width, d.height);
        d.step(&mut rng);
        assert!(d.width < w);
        assert!(d.height < h);
    }

    #[test]
    fn shrink_floors_at_minimum_visible_size() {
        let mut d = Droplet::new((0, 240));
        d.y = 1000.0;
        d.y_max = 2000.0;
        d.width = MIN_SIZE;
        d.height = MIN_SIZE;
        let mut rng = StdRng::seed_from_u64(1);
        d.step(&mut rng);
        assert_eq!(d.width, MIN_SIZE);
        assert_eq!(d.height, MIN_SIZE);
        assert!(d.rect().w >= 1 && d.rect().h >= 1);
    }

    #[test]
    fn respawns_past_floor_with_bounded_range() {
        let mut d = Droplet::new((0, 240));
        d.y_max = 160.0;
        let mut rng = StdRng::seed_from_u64(42);

        // Fall until the floor check trips.
        while d.y() <= d.y_max() {
            d.step(&mut rng);
        }
        d.step(&mut rng);

        // The frame after crossing resets to the respawn row.
        assert_eq!(d.y(), RESPAWN_Y);
        assert!(d.y_max() >= FLOOR_MIN as f32 && d.y_max() <= FLOOR_MAX as f32);
        assert!((0..=240).contains(&d.anchor_x));
    }

    #[test]
    fn bands_partition_the_screen() {
        let s = SweatSystem::new(1024);
        assert_eq!(s.droplets[0].band, (0, 240));
        assert_eq!(s.droplets[1].band, (240, 784));
        assert_eq!(s.droplets[2].band, (784, 1024));
    }

    #[test]
    fn narrow_screen_does_not_invert_bands() {
        let s = SweatSystem::new(300);
        for d in s.droplets() {
            assert!(d.band.0 <= d.band.1);
        }
        // Stepping with collapsed bands must not panic.
        let mut s = SweatSystem::new(300);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            s.step(&mut rng);
        }
    }
}
