//! Input routing: raw terminal events become playback commands.
//!
//! Pure translation with no state of its own; phase-dependent choices
//! (Start vs Pause vs Resume) consult the phase passed by the caller.

use crossterm::event::KeyEvent;
use valentine_core::{Command, Phase};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    TogglePause,
    Restart,
    SpeedUp,
    SpeedDown,
    Quit,
}

/// Translate a key event into a playback command, if it maps to one.
///
/// Unrecognized keys produce no command, not an error.
pub fn route(key: KeyEvent, phase: Phase, keymap: &Keymap) -> Option<Command> {
    let binding = KeyBinding::new(key.code, key.modifiers);
    let action = *keymap.get(&binding)?;
    command_for(action, phase)
}

/// Map an action to the command it means in the given phase.
pub fn command_for(action: Action, phase: Phase) -> Option<Command> {
    match (action, phase) {
        (Action::Quit, _) => Some(Command::Quit),

        // On the splash screen both the start key and the pause toggle
        // begin the animation
        (Action::Start | Action::TogglePause, Phase::Idle) => Some(Command::Start),
        (Action::Start, _) => None,

        (Action::TogglePause, Phase::Running) => Some(Command::Pause),
        (Action::TogglePause, Phase::Paused) => Some(Command::Resume),
        (Action::TogglePause, Phase::Completed) => None,

        (Action::Restart, _) => Some(Command::Restart),
        (Action::SpeedUp, _) => Some(Command::SpeedUp),
        (Action::SpeedDown, _) => Some(Command::SpeedDown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_starts_from_idle() {
        let keymap = Keymap::default();
        assert_eq!(
            route(key(KeyCode::Char(' ')), Phase::Idle, &keymap),
            Some(Command::Start)
        );
        assert_eq!(
            route(key(KeyCode::Enter), Phase::Idle, &keymap),
            Some(Command::Start)
        );
    }

    #[test]
    fn test_space_toggles_pause() {
        let keymap = Keymap::default();
        assert_eq!(
            route(key(KeyCode::Char(' ')), Phase::Running, &keymap),
            Some(Command::Pause)
        );
        assert_eq!(
            route(key(KeyCode::Char(' ')), Phase::Paused, &keymap),
            Some(Command::Resume)
        );
        // Nothing to pause once completed
        assert_eq!(route(key(KeyCode::Char(' ')), Phase::Completed, &keymap), None);
    }

    #[test]
    fn test_restart_speed_quit() {
        let keymap = Keymap::default();
        assert_eq!(
            route(key(KeyCode::Char('r')), Phase::Completed, &keymap),
            Some(Command::Restart)
        );
        assert_eq!(
            route(key(KeyCode::Up), Phase::Running, &keymap),
            Some(Command::SpeedUp)
        );
        assert_eq!(
            route(key(KeyCode::Down), Phase::Running, &keymap),
            Some(Command::SpeedDown)
        );
        assert_eq!(
            route(key(KeyCode::Char('q')), Phase::Running, &keymap),
            Some(Command::Quit)
        );
        assert_eq!(
            route(key(KeyCode::Esc), Phase::Idle, &keymap),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unrecognized_key_yields_no_command() {
        let keymap = Keymap::default();
        assert_eq!(route(key(KeyCode::Char('x')), Phase::Running, &keymap), None);
        assert_eq!(route(key(KeyCode::F(5)), Phase::Idle, &keymap), None);
    }

    #[test]
    fn test_enter_noop_outside_idle() {
        let keymap = Keymap::default();
        assert_eq!(route(key(KeyCode::Enter), Phase::Running, &keymap), None);
        assert_eq!(route(key(KeyCode::Enter), Phase::Completed, &keymap), None);
    }
}
