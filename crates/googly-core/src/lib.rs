//! Animation core for the googly robot-eyes renderer.
//!
//! This crate owns the whole animated state of an eye pair: geometry targets,
//! blink and idle timers, one-shot laugh/confused bursts, flicker offsets,
//! mood-dependent eyelids, and the sweat particles. Consumers mutate intent
//! through the setter surface (or the [`Command`] enum), then call
//! [`EyeRig::advance`] once per frame with the current time and a drawing
//! [`Surface`]; the advance step resolves timers, interpolates geometry, and
//! emits this frame's draw calls. Nothing here knows about terminals or
//! rasterization.

pub mod command;
pub mod fps;
pub mod geom;
pub mod logging;
pub mod mood;
pub mod rig;
pub mod surface;
pub mod sweat;
pub mod timing;
pub mod tween;

pub use command::Command;
pub use fps::{FramePacer, TickCounter};
pub use geom::{Point, Rect, Rgb};
pub use mood::{Gaze, Mood};
pub use rig::EyeRig;
pub use surface::{DrawCall, Recorder, Surface};
