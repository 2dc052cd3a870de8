/// Facial expression presets for the eye pair.
///
/// Exactly one mood is active at a time by construction; switching moods
/// retargets the eyelid overlays, which then blend over a few frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    /// Resting expression, no eyelid overlay.
    #[default]
    Neutral,
    /// Outer-corner top cut, drooping lids.
    Tired,
    /// Inner-corner top cut, furrowed lids.
    Angry,
    /// Bottom mask rising over the lower half of each eye.
    Happy,
}

impl Mood {
    /// Short lowercase label for status lines and logs.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
            Mood::Angry => "angry",
            Mood::Happy => "happy",
        }
    }
}

/// Where the eye pair is looking: eight compass anchors plus center.
///
/// Each anchor maps to `{0, constraint/2, constraint}` along each axis,
/// where the constraint is the largest top-left position at which the whole
/// eye-pair bounding box still fits the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gaze {
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Gaze {
    /// Resolve this anchor to a left-eye target position.
    pub fn anchor(self, constraint_x: i32, constraint_y: i32) -> (i32, i32) {
        match self {
            Gaze::North => (constraint_x / 2, 0),
            Gaze::NorthEast => (constraint_x, 0),
            Gaze::East => (constraint_x, constraint_y / 2),
            Gaze::SouthEast => (constraint_x, constraint_y),
            Gaze::South => (constraint_x / 2, constraint_y),
            Gaze::SouthWest => (0, constraint_y),
            Gaze::West => (0, constraint_y / 2),
            Gaze::NorthWest => (0, 0),
            Gaze::Center => (constraint_x / 2, constraint_y / 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_anchor_grid() {
        let (cx, cy) = (368, 224);
        assert_eq!(Gaze::North.anchor(cx, cy), (184, 0));
        assert_eq!(Gaze::NorthEast.anchor(cx, cy), (368, 0));
        assert_eq!(Gaze::East.anchor(cx, cy), (368, 112));
        assert_eq!(Gaze::SouthEast.anchor(cx, cy), (368, 224));
        assert_eq!(Gaze::South.anchor(cx, cy), (184, 224));
        assert_eq!(Gaze::SouthWest.anchor(cx, cy), (0, 224));
        assert_eq!(Gaze::West.anchor(cx, cy), (0, 112));
        assert_eq!(Gaze::NorthWest.anchor(cx, cy), (0, 0));
        assert_eq!(Gaze::Center.anchor(cx, cy), (184, 112));
    }

    #[test]
    fn default_mood_is_neutral() {
        assert_eq!(Mood::default(), Mood::Neutral);
        assert_eq!(Mood::Neutral.label(), "neutral");
    }
}
