use std::time::{Duration, Instant};

use googly_core::{Command, Gaze, Mood};

const SCENE_DURATION: Duration = Duration::from_secs(3);
const SCENE_COUNT: usize = 8;

/// Auto-cycling showcase of the rig's behaviors.
///
/// Plays eight scenes of three seconds each, wrapping around forever:
/// resting blink, the three moods, curious wandering, laugh, confused, and
/// sweat. Scene changes are delivered as command batches so the driver
/// applies them exactly like key input.
pub struct DemoSequencer {
    enabled: bool,
    scene: usize,
    next: Option<Instant>,
}

impl DemoSequencer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            scene: 0,
            next: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the demo on or off, returning the new state. Re-enabling
    /// restarts from the first scene.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.scene = 0;
            self.next = None;
        }
        self.enabled
    }

    /// When a scene change is due, return its name and command batch.
    ///
    /// Fires immediately after enabling, then every three seconds.
    pub fn step(&mut self, now: Instant) -> Option<(&'static str, Vec<Command>)> {
        if !self.enabled {
            return None;
        }
        if let Some(deadline) = self.next {
            if now < deadline {
                return None;
            }
        }
        let current = scene(self.scene);
        self.scene = (self.scene + 1) % SCENE_COUNT;
        self.next = Some(now + SCENE_DURATION);
        Some(current)
    }
}

fn scene(idx: usize) -> (&'static str, Vec<Command>) {
    match idx {
        0 => (
            "resting blink",
            vec![
                Command::SetMood(Mood::Neutral),
                Command::Look(Gaze::Center),
                Command::Sweat(false),
            ],
        ),
        1 => ("happy", vec![Command::SetMood(Mood::Happy)]),
        2 => ("tired", vec![Command::SetMood(Mood::Tired)]),
        3 => ("angry", vec![Command::SetMood(Mood::Angry)]),
        4 => (
            "curious wander",
            vec![
                Command::SetMood(Mood::Neutral),
                Command::Curious(true),
                Command::IdleMode {
                    on: true,
                    interval_s: 1,
                    jitter_s: 2,
                },
            ],
        ),
        5 => (
            "laugh",
            vec![
                Command::Curious(false),
                Command::IdleMode {
                    on: false,
                    interval_s: 1,
                    jitter_s: 2,
                },
                Command::Laugh,
            ],
        ),
        6 => ("confused", vec![Command::Confused]),
        _ => ("sweat", vec![Command::Sweat(true)]),
    }
}
