//! Discrete control inputs for the rig.
//!
//! Every setter on [`EyeRig`] has a [`Command`] form so key handlers, demo
//! scripts, and tests can all speak the same closed vocabulary. Applying a
//! command mutates intent only; nothing is drawn until the next advance.

use crate::mood::{Gaze, Mood};
use crate::rig::EyeRig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetMood(Mood),
    Look(Gaze),
    Autoblinker {
        on: bool,
        interval_s: u64,
        jitter_s: u64,
    },
    IdleMode {
        on: bool,
        interval_s: u64,
        jitter_s: u64,
    },
    Curious(bool),
    Cyclops(bool),
    Sweat(bool),
    HFlicker {
        on: bool,
        amplitude: Option<i32>,
    },
    VFlicker {
        on: bool,
        amplitude: Option<i32>,
    },
    Open {
        left: bool,
        right: bool,
    },
    Close {
        left: bool,
        right: bool,
    },
    Blink {
        left: bool,
        right: bool,
    },
    Laugh,
    Confused,
}

impl Command {
    pub fn apply(self, rig: &mut EyeRig) {
        match self {
            Command::SetMood(mood) => rig.set_mood(mood),
            Command::Look(gaze) => rig.set_gaze(gaze),
            Command::Autoblinker {
                on,
                interval_s,
                jitter_s,
            } => rig.set_autoblinker(on, interval_s, jitter_s),
            Command::IdleMode {
                on,
                interval_s,
                jitter_s,
            } => rig.set_idle(on, interval_s, jitter_s),
            Command::Curious(on) => rig.set_curious(on),
            Command::Cyclops(on) => rig.set_cyclops(on),
            Command::Sweat(on) => rig.set_sweat(on),
            Command::HFlicker { on, amplitude } => rig.set_h_flicker(on, amplitude),
            Command::VFlicker { on, amplitude } => rig.set_v_flicker(on, amplitude),
            Command::Open { left, right } => rig.open(left, right),
            Command::Close { left, right } => rig.close(left, right),
            Command::Blink { left, right } => rig.blink(left, right),
            Command::Laugh => rig.trigger_laugh(),
            Command::Confused => rig.trigger_confused(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_reach_the_rig() {
        let mut rig = EyeRig::with_seed(1024, 512, 1);

        Command::SetMood(Mood::Happy).apply(&mut rig);
        assert_eq!(rig.mood(), Mood::Happy);

        Command::Look(Gaze::North).apply(&mut rig);
        assert_eq!(rig.left_target(), (184, 0));

        Command::Cyclops(true).apply(&mut rig);
        assert!(rig.cyclops());

        Command::IdleMode {
            on: true,
            interval_s: 1,
            jitter_s: 3,
        }
        .apply(&mut rig);
        assert!(rig.idle_enabled());

        Command::Sweat(true).apply(&mut rig);
        assert!(rig.sweat_enabled());
    }

    #[test]
    fn blink_command_targets_single_eyes() {
        let mut rig = EyeRig::with_seed(1024, 512, 1);
        rig.open(true, true);

        // A left-only blink leaves the right eye's trajectory alone.
        Command::Blink {
            left: true,
            right: false,
        }
        .apply(&mut rig);
        // Introspection is indirect: after settling, both eyes are open
        // again, which is only possible if the right eye never closed.
        use crate::surface::Recorder;
        use std::time::{Duration, Instant};
        let mut rec = Recorder::new();
        let mut now = Instant::now();
        for _ in 0..80 {
            now += Duration::from_millis(20);
            rig.advance(now, &mut rec);
        }
        assert_eq!(rig.left_height(), 287);
    }
}
