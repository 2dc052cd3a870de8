//! The eye rig: animation state, command surface, and the frame advancer.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::geom::{Point, Rect, Rgb};
use crate::mood::{Gaze, Mood};
use crate::surface::Surface;
use crate::sweat::{self, SweatSystem};
use crate::timing::{OneShot, OneShotStep, PeriodicTimer};
use crate::tween;

/// Background fill behind the eyes.
pub const DEFAULT_BG: Rgb = Rgb(0, 0, 0);
/// Eye and droplet fill.
pub const DEFAULT_MAIN: Rgb = Rgb(0, 200, 255);

const EYE_WIDTH_DEFAULT: i32 = 288;
const EYE_HEIGHT_DEFAULT: i32 = 288;
const EYE_CORNER_RADIUS: i32 = 40;
const GAP_DEFAULT: i32 = 80;
/// Fully closed eyelid height; eyes never draw thinner than this.
const HEIGHT_MIN: i32 = 1;

/// Distance from a screen edge at which a sideways glance widens the eye.
const CURIOUS_EDGE: i32 = 80;
/// Height boost applied at the edge.
const CURIOUS_BOOST: i32 = 64;

const H_FLICKER_AMPLITUDE: i32 = 16;
const V_FLICKER_AMPLITUDE: i32 = 80;
const LAUGH_AMPLITUDE: i32 = 40;
const CONFUSED_AMPLITUDE: i32 = 160;
const BURST_DURATION: Duration = Duration::from_millis(500);

const AUTOBLINK_INTERVAL_S: u64 = 1;
const AUTOBLINK_JITTER_S: u64 = 4;
const IDLE_INTERVAL_S: u64 = 1;
const IDLE_JITTER_S: u64 = 3;

/// Per-eye geometry. Heights blend along the blink axis; widths and corner
/// radii stay put unless retargeted.
#[derive(Debug, Clone)]
struct EyeState {
    height_default: i32,
    width_current: i32,
    height_current: i32,
    width_target: i32,
    height_target: i32,
    x: i32,
    y: i32,
    x_target: i32,
    y_target: i32,
    corner_radius: i32,
    open: bool,
    height_offset: i32,
}

impl EyeState {
    fn new(x: i32, y: i32) -> Self {
        Self {
            height_default: EYE_HEIGHT_DEFAULT,
            width_current: EYE_WIDTH_DEFAULT,
            // Eyes start closed and blend open after `open()`.
            height_current: HEIGHT_MIN,
            width_target: EYE_WIDTH_DEFAULT,
            height_target: EYE_HEIGHT_DEFAULT,
            x,
            y,
            x_target: x,
            y_target: y,
            corner_radius: EYE_CORNER_RADIUS,
            open: false,
            height_offset: 0,
        }
    }

    /// One frame of the blink axis: blend height (with any curiosity boost),
    /// recenter vertically, and snap the target back to fully open once a
    /// closing eye on an opening trajectory bottoms out.
    fn step_height(&mut self) {
        self.height_current =
            tween::settle_with_boost(self.height_current, self.height_target, self.height_offset);
        self.y += (self.height_default - self.height_current).div_euclid(2);
        self.y -= self.height_offset.div_euclid(2);
        if self.open && self.height_current <= HEIGHT_MIN + self.height_offset {
            self.height_target = self.height_default;
        }
    }
}

/// Draw-time positional jitter, sign alternating every frame.
#[derive(Debug, Clone)]
struct Flicker {
    on: bool,
    alternate: bool,
    amplitude: i32,
}

impl Flicker {
    fn new(amplitude: i32) -> Self {
        Self {
            on: false,
            alternate: false,
            amplitude,
        }
    }

    fn next_offset(&mut self) -> i32 {
        let offset = if self.alternate {
            self.amplitude
        } else {
            -self.amplitude
        };
        self.alternate = !self.alternate;
        offset
    }
}

/// Mood eyelid blend state. At most one of tired/angry is nonzero at steady
/// state because the mood enum retargets the other to zero.
#[derive(Debug, Clone, Default)]
struct Eyelids {
    tired: i32,
    angry: i32,
    happy: i32,
}

/// An animated pair of robot eyes.
///
/// Setters record intent only; [`advance`](Self::advance) is the single
/// place that resolves timers, blends state toward targets, and draws. Call
/// it once per frame with the current time. All randomness comes from the
/// rig's own RNG, so a seeded rig replays identically.
pub struct EyeRig {
    screen_w: i32,
    screen_h: i32,
    bg: Rgb,
    main: Rgb,

    left: EyeState,
    right: EyeState,
    space_current: i32,
    space_target: i32,

    mood: Mood,
    curious: bool,
    cyclops: bool,
    sweat_on: bool,

    h_flicker: Flicker,
    v_flicker: Flicker,

    autoblink: PeriodicTimer,
    idle: PeriodicTimer,
    laugh: OneShot,
    confused: OneShot,

    lids: Eyelids,
    sweat: SweatSystem,
    rng: StdRng,
}

impl EyeRig {
    /// Rig for a `screen_w` x `screen_h` surface, seeded from OS entropy.
    pub fn new(screen_w: i32, screen_h: i32) -> Self {
        Self::with_rng(screen_w, screen_h, StdRng::from_entropy())
    }

    /// Deterministic rig: every random behavior (blink jitter, idle wander,
    /// sweat respawn) replays identically for the same seed.
    pub fn with_seed(screen_w: i32, screen_h: i32, seed: u64) -> Self {
        Self::with_rng(screen_w, screen_h, StdRng::seed_from_u64(seed))
    }

    fn with_rng(screen_w: i32, screen_h: i32, rng: StdRng) -> Self {
        let pair_width = EYE_WIDTH_DEFAULT + GAP_DEFAULT + EYE_WIDTH_DEFAULT;
        let left_x = (screen_w - pair_width).div_euclid(2);
        let left_y = (screen_h - EYE_HEIGHT_DEFAULT).div_euclid(2);
        let left = EyeState::new(left_x, left_y);
        let right = EyeState::new(left_x + EYE_WIDTH_DEFAULT + GAP_DEFAULT, left_y);

        Self {
            screen_w,
            screen_h,
            bg: DEFAULT_BG,
            main: DEFAULT_MAIN,
            left,
            right,
            space_current: GAP_DEFAULT,
            space_target: GAP_DEFAULT,
            mood: Mood::Neutral,
            curious: false,
            cyclops: false,
            sweat_on: false,
            h_flicker: Flicker::new(H_FLICKER_AMPLITUDE),
            v_flicker: Flicker::new(V_FLICKER_AMPLITUDE),
            autoblink: PeriodicTimer::new(AUTOBLINK_INTERVAL_S, AUTOBLINK_JITTER_S),
            idle: PeriodicTimer::new(IDLE_INTERVAL_S, IDLE_JITTER_S),
            laugh: OneShot::new(BURST_DURATION),
            confused: OneShot::new(BURST_DURATION),
            lids: Eyelids::default(),
            sweat: SweatSystem::new(screen_w),
            rng,
        }
    }

    // ── Command surface ──
    //
    // Pure intent recording; nothing here draws or reads the clock.

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Retarget the left eye to a compass anchor; the right eye follows via
    /// its derived target.
    pub fn set_gaze(&mut self, gaze: Gaze) {
        let (x, y) = gaze.anchor(self.screen_constraint_x(), self.screen_constraint_y());
        self.left.x_target = x;
        self.left.y_target = y;
    }

    pub fn set_autoblinker(&mut self, on: bool, interval_s: u64, jitter_s: u64) {
        self.autoblink.configure(on, interval_s, jitter_s);
    }

    pub fn set_idle(&mut self, on: bool, interval_s: u64, jitter_s: u64) {
        self.idle.configure(on, interval_s, jitter_s);
    }

    pub fn set_curious(&mut self, on: bool) {
        self.curious = on;
    }

    pub fn set_cyclops(&mut self, on: bool) {
        self.cyclops = on;
    }

    /// `None` amplitude restores the default.
    pub fn set_h_flicker(&mut self, on: bool, amplitude: Option<i32>) {
        self.h_flicker.on = on;
        self.h_flicker.amplitude = amplitude.unwrap_or(H_FLICKER_AMPLITUDE);
    }

    /// `None` amplitude restores the default.
    pub fn set_v_flicker(&mut self, on: bool, amplitude: Option<i32>) {
        self.v_flicker.on = on;
        self.v_flicker.amplitude = amplitude.unwrap_or(V_FLICKER_AMPLITUDE);
    }

    pub fn set_sweat(&mut self, on: bool) {
        self.sweat_on = on;
    }

    pub fn set_colors(&mut self, bg: Rgb, main: Rgb) {
        self.bg = bg;
        self.main = main;
    }

    /// Put the selected eyes on an opening trajectory.
    pub fn open(&mut self, left: bool, right: bool) {
        if left {
            self.left.open = true;
        }
        if right {
            self.right.open = true;
        }
    }

    /// Drive the selected eyes closed and keep them closed.
    pub fn close(&mut self, left: bool, right: bool) {
        if left {
            self.left.height_target = HEIGHT_MIN;
            self.left.open = false;
        }
        if right {
            self.right.height_target = HEIGHT_MIN;
            self.right.open = false;
        }
    }

    /// Close then re-open: the open flag makes the height target snap back
    /// to default once the lid bottoms out, so no timer is needed.
    pub fn blink(&mut self, left: bool, right: bool) {
        self.close(left, right);
        self.open(left, right);
    }

    /// Arm the laugh burst (short vertical shake). No-op while running.
    pub fn trigger_laugh(&mut self) {
        self.laugh.trigger();
    }

    /// Arm the confused burst (short horizontal shake). No-op while running.
    pub fn trigger_confused(&mut self) {
        self.confused.trigger();
    }

    // ── Introspection ──

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn curious(&self) -> bool {
        self.curious
    }

    pub fn cyclops(&self) -> bool {
        self.cyclops
    }

    pub fn sweat_enabled(&self) -> bool {
        self.sweat_on
    }

    pub fn idle_enabled(&self) -> bool {
        self.idle.enabled()
    }

    pub fn autoblink_enabled(&self) -> bool {
        self.autoblink.enabled()
    }

    /// Largest left-eye x at which both eyes and the gap still fit.
    pub fn screen_constraint_x(&self) -> i32 {
        self.screen_w - self.left.width_current - self.space_current - self.right.width_current
    }

    /// Largest left-eye y at which a fully open eye still fits.
    pub fn screen_constraint_y(&self) -> i32 {
        self.screen_h - self.left.height_default
    }

    pub fn left_height(&self) -> i32 {
        self.left.height_current
    }

    pub fn left_position(&self) -> (i32, i32) {
        (self.left.x, self.left.y)
    }

    pub fn left_target(&self) -> (i32, i32) {
        (self.left.x_target, self.left.y_target)
    }

    pub fn right_position(&self) -> (i32, i32) {
        (self.right.x, self.right.y)
    }

    /// Current eyelid blend values `(tired, angry, happy)`.
    pub fn eyelids(&self) -> (i32, i32, i32) {
        (self.lids.tired, self.lids.angry, self.lids.happy)
    }

    // ── Frame advancer ──

    /// Advance one frame and draw it.
    ///
    /// Resolves timers against `now`, blends all geometry one step toward
    /// its targets, then emits this frame's draw calls. Pacing is the
    /// caller's job; nothing in here sleeps.
    pub fn advance(&mut self, now: Instant, surface: &mut impl Surface) {
        self.step_curiosity();

        self.left.step_height();
        self.right.step_height();

        self.left.width_current = tween::settle(self.left.width_current, self.left.width_target);
        self.right.width_current = tween::settle(self.right.width_current, self.right.width_target);
        self.space_current = tween::settle(self.space_current, self.space_target);

        self.left.x = tween::settle(self.left.x, self.left.x_target);
        self.left.y = tween::settle(self.left.y, self.left.y_target);

        // The right eye chases the left eye's commanded destination, offset
        // by the current width and gap, with its own blend rate. Recomputing
        // from targets every frame avoids any ordering dependence between
        // the two eyes.
        self.right.x_target = self.left.x_target + self.left.width_current + self.space_current;
        self.right.y_target = self.left.y_target;
        self.right.x = tween::settle(self.right.x, self.right.x_target);
        self.right.y = tween::settle(self.right.y, self.right.y_target);

        if self.autoblink.fire(now, &mut self.rng) {
            self.blink(true, true);
        }

        match self.laugh.step(now) {
            OneShotStep::Begin => self.set_v_flicker(true, Some(LAUGH_AMPLITUDE)),
            OneShotStep::End => self.set_v_flicker(false, Some(0)),
            OneShotStep::Idle | OneShotStep::Hold => {}
        }
        match self.confused.step(now) {
            OneShotStep::Begin => self.set_h_flicker(true, Some(CONFUSED_AMPLITUDE)),
            OneShotStep::End => self.set_h_flicker(false, Some(0)),
            OneShotStep::Idle | OneShotStep::Hold => {}
        }

        if self.idle.fire(now, &mut self.rng) {
            let cx = self.screen_constraint_x().max(0);
            let cy = self.screen_constraint_y().max(0);
            self.left.x_target = self.rng.gen_range(0..=cx);
            self.left.y_target = self.rng.gen_range(0..=cy);
        }

        self.draw(surface);
    }

    /// Widen an eye when its target hugs the screen edge it faces. The
    /// boost feeds the height blend and is compensated by a y-shift so the
    /// eye stays vertically centered.
    fn step_curiosity(&mut self) {
        if !self.curious {
            self.left.height_offset = 0;
            self.right.height_offset = 0;
            return;
        }

        let near_left_edge = self.left.x_target <= CURIOUS_EDGE;
        let pinned_far_edge =
            self.cyclops && self.left.x_target >= self.screen_constraint_x() - CURIOUS_EDGE;
        self.left.height_offset = if near_left_edge || pinned_far_edge {
            CURIOUS_BOOST
        } else {
            0
        };

        let near_right_edge =
            self.right.x_target >= self.screen_w - self.right.width_current - CURIOUS_EDGE;
        self.right.height_offset = if near_right_edge { CURIOUS_BOOST } else { 0 };
    }

    fn draw(&mut self, surface: &mut impl Surface) {
        // Flicker shifts apply to this frame's draw positions only and are
        // never written back into the blended state.
        let mut lx = self.left.x;
        let mut ly = self.left.y;
        let mut rx = self.right.x;
        let mut ry = self.right.y;
        if self.h_flicker.on {
            let offset = self.h_flicker.next_offset();
            lx += offset;
            rx += offset;
        }
        if self.v_flicker.on {
            let offset = self.v_flicker.next_offset();
            ly += offset;
            ry += offset;
        }

        let lw = self.left.width_current;
        let lh = self.left.height_current;
        let rw = self.right.width_current;
        let rh = self.right.height_current;

        surface.clear(self.bg);
        surface.fill_rounded_rect(self.main, Rect::new(lx, ly, lw, lh), self.left.corner_radius);
        // Cyclops keeps the right eye's interpolation running but never
        // draws it, so toggling back shows consistent state.
        if !self.cyclops {
            surface.fill_rounded_rect(self.main, Rect::new(rx, ry, rw, rh), self.right.corner_radius);
        }

        // Eyelid targets derive from the mood each frame and blend like any
        // other geometry. Both eyes use current (non-flickered) sizes; only
        // the x/y anchors follow the flicker shift.
        let half = lh / 2;
        let (tired_target, angry_target, happy_target) = match self.mood {
            Mood::Tired => (half, 0, 0),
            Mood::Angry => (0, half, 0),
            Mood::Happy => (0, 0, half),
            Mood::Neutral => (0, 0, 0),
        };
        self.lids.tired = tween::settle(self.lids.tired, tired_target);
        self.lids.angry = tween::settle(self.lids.angry, angry_target);
        self.lids.happy = tween::settle(self.lids.happy, happy_target);

        if self.lids.tired > 0 {
            let cut = self.lids.tired;
            if self.cyclops {
                // Single eye: split the droop at the centerline.
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(lx, ly - 1),
                        Point::new(lx + lw / 2, ly - 1),
                        Point::new(lx, ly + cut - 1),
                    ],
                );
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(lx + lw / 2, ly - 1),
                        Point::new(lx + lw, ly - 1),
                        Point::new(lx + lw, ly + cut - 1),
                    ],
                );
            } else {
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(lx, ly - 1),
                        Point::new(lx + lw, ly - 1),
                        Point::new(lx, ly + cut - 1),
                    ],
                );
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(rx, ry - 1),
                        Point::new(rx + rw, ry - 1),
                        Point::new(rx + rw, ry + cut - 1),
                    ],
                );
            }
        }

        if self.lids.angry > 0 {
            let cut = self.lids.angry;
            if self.cyclops {
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(lx, ly - 1),
                        Point::new(lx + lw / 2, ly - 1),
                        Point::new(lx + lw / 2, ly + cut - 1),
                    ],
                );
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(lx + lw / 2, ly - 1),
                        Point::new(lx + lw, ly - 1),
                        Point::new(lx + lw / 2, ly + cut - 1),
                    ],
                );
            } else {
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(lx, ly - 1),
                        Point::new(lx + lw, ly - 1),
                        Point::new(lx + lw, ly + cut - 1),
                    ],
                );
                surface.fill_polygon(
                    self.bg,
                    &[
                        Point::new(rx, ry - 1),
                        Point::new(rx + rw, ry - 1),
                        Point::new(rx, ry + cut - 1),
                    ],
                );
            }
        }

        if self.lids.happy > 0 {
            let rise = self.lids.happy;
            surface.fill_rounded_rect(
                self.bg,
                Rect::new(lx - 1, ly + lh - rise + 1, lw + 2, self.left.height_default),
                self.left.corner_radius,
            );
            if !self.cyclops {
                surface.fill_rounded_rect(
                    self.bg,
                    Rect::new(rx - 1, ry + rh - rise + 1, rw + 2, self.right.height_default),
                    self.right.corner_radius,
                );
            }
        }

        if self.sweat_on {
            self.sweat.step(&mut self.rng);
            for droplet in self.sweat.droplets() {
                surface.fill_rounded_rect(self.main, droplet.rect(), sweat::DROPLET_RADIUS);
            }
        }
    }
}
