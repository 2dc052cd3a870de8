use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Measures rendered frames-per-second over a sliding time window.
///
/// Call [`tick`](TickCounter::tick) once per frame, then
/// [`fps`](TickCounter::fps) to read the current rate. Timestamps outside
/// the window are pruned automatically.
pub struct TickCounter {
    timestamps: VecDeque<Instant>,
    window: Duration,
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl TickCounter {
    /// Create a counter with the given measurement window.
    pub fn new(window: Duration) -> Self {
        Self {
            timestamps: VecDeque::new(),
            window,
        }
    }

    /// Record a frame at the given instant and prune expired timestamps.
    pub fn tick(&mut self, now: Instant) {
        self.timestamps.push_back(now);
        self.prune(now);
    }

    /// Current frames-per-second based on timestamps in the window.
    ///
    /// Returns `0.0` until at least two frames have been recorded.
    pub fn fps(&self) -> f64 {
        if self.timestamps.len() < 2 {
            return 0.0;
        }
        let now = match self.timestamps.back() {
            Some(t) => *t,
            None => return 0.0,
        };
        let window_start = now - self.window;
        let count = self
            .timestamps
            .iter()
            .filter(|&&t| t >= window_start)
            .count();
        count as f64 / self.window.as_secs_f64()
    }

    fn prune(&mut self, now: Instant) {
        let cutoff = now - self.window;
        while let Some(&front) = self.timestamps.front() {
            if front < cutoff {
                self.timestamps.pop_front();
            } else {
                break;
            }
        }
    }
}

/// Fixed-rate frame budget.
///
/// The render loop asks [`remaining`](FramePacer::remaining) how long it may
/// block waiting for input, and [`frame_due`](FramePacer::frame_due) whether
/// the next frame should run. Overruns resynchronize to `now` instead of
/// firing a backlog of catch-up frames.
pub struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            frame,
            next: now + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left in the current frame budget; zero once the deadline passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// True when the frame deadline has arrived. Advances the deadline.
    pub fn frame_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counter_returns_zero() {
        let counter = TickCounter::default();
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn single_tick_returns_zero() {
        let mut counter = TickCounter::default();
        counter.tick(Instant::now());
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn steady_rate_is_measured() {
        let mut counter = TickCounter::new(Duration::from_secs(1));
        let base = Instant::now();
        for i in 0..50 {
            counter.tick(base + Duration::from_millis(i * 20));
        }
        let fps = counter.fps();
        assert!(fps > 45.0 && fps < 55.0, "fps was {}", fps);
    }

    #[test]
    fn old_timestamps_pruned() {
        let mut counter = TickCounter::new(Duration::from_secs(1));
        let base = Instant::now();
        for i in 0..5 {
            counter.tick(base + Duration::from_millis(i * 200));
        }
        for i in 0..3 {
            counter.tick(base + Duration::from_millis(1000 + i * 300));
        }
        assert!(
            counter.timestamps.len() <= 5,
            "timestamps: {}",
            counter.timestamps.len()
        );
    }

    #[test]
    fn pacer_waits_out_the_frame_budget() {
        let base = Instant::now();
        let mut pacer = FramePacer::new(50, base);
        assert!(!pacer.frame_due(base + Duration::from_millis(10)));
        assert_eq!(
            pacer.remaining(base + Duration::from_millis(10)),
            Duration::from_millis(10)
        );
        assert!(pacer.frame_due(base + Duration::from_millis(20)));
        assert!(!pacer.frame_due(base + Duration::from_millis(21)));
    }

    #[test]
    fn pacer_resyncs_after_a_stall() {
        let base = Instant::now();
        let mut pacer = FramePacer::new(50, base);
        // A 500 ms stall must not produce 25 back-to-back frames.
        assert!(pacer.frame_due(base + Duration::from_millis(500)));
        assert!(!pacer.frame_due(base + Duration::from_millis(501)));
        assert!(pacer.frame_due(base + Duration::from_millis(520)));
    }

    #[test]
    fn zero_fps_is_clamped() {
        let base = Instant::now();
        let pacer = FramePacer::new(0, base);
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1));
    }
}
