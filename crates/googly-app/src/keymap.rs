use crossterm::event::{KeyCode, KeyEvent};

use googly_core::{Gaze, Mood};

/// What a key press asks the app to do.
///
/// Toggles are resolved against current rig state by the dispatcher, so the
/// mapping itself stays a pure lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    ToggleDemo,
    ToggleIdle,
    ToggleSweat,
    ToggleCyclops,
    ToggleCurious,
    Mood(Mood),
    Look(Gaze),
    Blink,
    Laugh,
    Confused,
}

pub fn input_for(key: &KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('d') => Some(Input::ToggleDemo),
        KeyCode::Char('1') => Some(Input::Mood(Mood::Neutral)),
        KeyCode::Char('2') => Some(Input::Mood(Mood::Happy)),
        KeyCode::Char('3') => Some(Input::Mood(Mood::Tired)),
        KeyCode::Char('4') => Some(Input::Mood(Mood::Angry)),
        KeyCode::Char('5') => Some(Input::ToggleIdle),
        KeyCode::Char('6') => Some(Input::Laugh),
        KeyCode::Char('7') => Some(Input::Confused),
        KeyCode::Char('8') => Some(Input::ToggleSweat),
        KeyCode::Char('9') => Some(Input::ToggleCyclops),
        KeyCode::Char('c') => Some(Input::ToggleCurious),
        KeyCode::Up => Some(Input::Look(Gaze::North)),
        KeyCode::Down => Some(Input::Look(Gaze::South)),
        KeyCode::Left => Some(Input::Look(Gaze::West)),
        KeyCode::Right => Some(Input::Look(Gaze::East)),
        KeyCode::Char(' ') => Some(Input::Blink),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_map_to_moods_and_toggles() {
        assert_eq!(
            input_for(&key(KeyCode::Char('1'))),
            Some(Input::Mood(Mood::Neutral))
        );
        assert_eq!(
            input_for(&key(KeyCode::Char('2'))),
            Some(Input::Mood(Mood::Happy))
        );
        assert_eq!(
            input_for(&key(KeyCode::Char('3'))),
            Some(Input::Mood(Mood::Tired))
        );
        assert_eq!(
            input_for(&key(KeyCode::Char('4'))),
            Some(Input::Mood(Mood::Angry))
        );
        assert_eq!(input_for(&key(KeyCode::Char('5'))), Some(Input::ToggleIdle));
        assert_eq!(input_for(&key(KeyCode::Char('9'))), Some(Input::ToggleCyclops));
    }

    #[test]
    fn arrows_map_to_compass_gazes() {
        assert_eq!(input_for(&key(KeyCode::Up)), Some(Input::Look(Gaze::North)));
        assert_eq!(input_for(&key(KeyCode::Down)), Some(Input::Look(Gaze::South)));
        assert_eq!(input_for(&key(KeyCode::Left)), Some(Input::Look(Gaze::West)));
        assert_eq!(input_for(&key(KeyCode::Right)), Some(Input::Look(Gaze::East)));
    }

    #[test]
    fn both_quit_keys_work() {
        assert_eq!(input_for(&key(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(input_for(&key(KeyCode::Esc)), Some(Input::Quit));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(input_for(&key(KeyCode::Char('z'))), None);
        assert_eq!(input_for(&key(KeyCode::Tab)), None);
    }
}
