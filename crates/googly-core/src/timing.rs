//! Lazily evaluated wall-clock timers.
//!
//! There is no timer thread; every deadline is checked inside the frame
//! advance. Periodic timers (autoblink, idle wander) refire with a uniform
//! whole-second jitter on top of their base interval. One-shots (laugh,
//! confused) run a fixed duration and ignore re-triggers while active.

use std::time::{Duration, Instant};

use rand::Rng;

/// Repeating behavior timer with uniform whole-second jitter.
///
/// A `None` deadline counts as already due, so a freshly enabled timer fires
/// on the next advance rather than waiting out a full interval first.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    enabled: bool,
    deadline: Option<Instant>,
    interval_s: u64,
    jitter_s: u64,
}

impl PeriodicTimer {
    pub fn new(interval_s: u64, jitter_s: u64) -> Self {
        Self {
            enabled: false,
            deadline: None,
            interval_s,
            jitter_s,
        }
    }

    /// Enable or disable, updating the base interval and jitter bound.
    /// Disabling clears the pending deadline.
    pub fn configure(&mut self, enabled: bool, interval_s: u64, jitter_s: u64) {
        self.enabled = enabled;
        self.interval_s = interval_s;
        self.jitter_s = jitter_s;
        if !enabled {
            self.deadline = None;
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Check the deadline; when due, reschedule with fresh jitter and return
    /// `true` so the caller runs the behavior this frame.
    pub fn fire(&mut self, now: Instant, rng: &mut impl Rng) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(deadline) = self.deadline {
            if now < deadline {
                return false;
            }
        }
        let jitter = rng.gen_range(0..=self.jitter_s);
        self.deadline = Some(now + Duration::from_secs(self.interval_s + jitter));
        true
    }
}

/// What the caller must do for a one-shot this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotStep {
    /// Not running.
    Idle,
    /// First frame after a trigger; apply the side effect.
    Begin,
    /// Running, duration not yet elapsed.
    Hold,
    /// Duration elapsed; undo the side effect.
    End,
}

/// A fixed-duration burst behavior.
///
/// The armed flag makes the begin branch run exactly once per activation;
/// triggering again while active is a no-op rather than a restart.
#[derive(Debug, Clone)]
pub struct OneShot {
    active: bool,
    armed: bool,
    started_at: Option<Instant>,
    duration: Duration,
}

impl OneShot {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: false,
            armed: true,
            started_at: None,
            duration,
        }
    }

    pub fn trigger(&mut self) {
        self.active = true;
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn step(&mut self, now: Instant) -> OneShotStep {
        if !self.active {
            return OneShotStep::Idle;
        }
        if self.armed {
            self.armed = false;
            self.started_at = Some(now);
            return OneShotStep::Begin;
        }
        match self.started_at {
            Some(started) if now >= started + self.duration => {
                self.active = false;
                self.armed = true;
                self.started_at = None;
                OneShotStep::End
            }
            _ => OneShotStep::Hold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn disabled_timer_never_fires() {
        let mut t = PeriodicTimer::new(1, 0);
        assert!(!t.fire(Instant::now(), &mut rng()));
    }

    #[test]
    fn fresh_enabled_timer_fires_immediately() {
        let mut t = PeriodicTimer::new(1, 0);
        t.configure(true, 1, 0);
        assert!(t.fire(Instant::now(), &mut rng()));
    }

    #[test]
    fn reschedule_waits_out_interval_plus_jitter() {
        let mut t = PeriodicTimer::new(2, 3);
        t.configure(true, 2, 3);
        let mut r = rng();
        let base = Instant::now();
        assert!(t.fire(base, &mut r));
        // Not due again before the base interval.
        assert!(!t.fire(base + Duration::from_millis(1999), &mut r));
        // Must be due by interval + max jitter.
        assert!(t.fire(base + Duration::from_secs(2 + 3), &mut r));
    }

    #[test]
    fn disabling_clears_deadline_so_reenable_fires() {
        let mut t = PeriodicTimer::new(60, 0);
        t.configure(true, 60, 0);
        let mut r = rng();
        let base = Instant::now();
        assert!(t.fire(base, &mut r));
        t.configure(false, 60, 0);
        t.configure(true, 60, 0);
        assert!(t.fire(base + Duration::from_millis(1), &mut r));
    }

    #[test]
    fn one_shot_phases() {
        let mut o = OneShot::new(Duration::from_millis(500));
        let base = Instant::now();
        assert_eq!(o.step(base), OneShotStep::Idle);

        o.trigger();
        assert_eq!(o.step(base), OneShotStep::Begin);
        assert_eq!(o.step(base + Duration::from_millis(100)), OneShotStep::Hold);
        assert_eq!(o.step(base + Duration::from_millis(500)), OneShotStep::End);
        assert!(!o.active());
        assert_eq!(o.step(base + Duration::from_millis(600)), OneShotStep::Idle);
    }

    #[test]
    fn retrigger_while_active_does_not_restart() {
        let mut o = OneShot::new(Duration::from_millis(500));
        let base = Instant::now();
        o.trigger();
        assert_eq!(o.step(base), OneShotStep::Begin);

        // Trigger again mid-run: no second Begin, and the original deadline
        // still applies.
        o.trigger();
        assert_eq!(o.step(base + Duration::from_millis(200)), OneShotStep::Hold);
        assert_eq!(o.step(base + Duration::from_millis(500)), OneShotStep::End);
    }

    #[test]
    fn one_shot_can_rerun_after_finishing() {
        let mut o = OneShot::new(Duration::from_millis(500));
        let base = Instant::now();
        o.trigger();
        o.step(base);
        o.step(base + Duration::from_millis(500));

        o.trigger();
        assert_eq!(o.step(base + Duration::from_secs(1)), OneShotStep::Begin);
    }
}
