//! Key mapping from terminal events to logical inputs.

use crate::types::LogicalInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to one of the four buttons.
pub fn logical_input(key: KeyEvent) -> Option<LogicalInput> {
    match key.code {
        // Left player
        KeyCode::Char('w') | KeyCode::Char('W') => Some(LogicalInput::LeftUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(LogicalInput::LeftDown),

        // Right player
        KeyCode::Up | KeyCode::Char('i') | KeyCode::Char('I') => Some(LogicalInput::RightUp),
        KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('K') => Some(LogicalInput::RightDown),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_left_player_keys() {
        assert_eq!(
            logical_input(KeyEvent::from(KeyCode::Char('w'))),
            Some(LogicalInput::LeftUp)
        );
        assert_eq!(
            logical_input(KeyEvent::from(KeyCode::Char('S'))),
            Some(LogicalInput::LeftDown)
        );
    }

    #[test]
    fn test_right_player_keys() {
        assert_eq!(
            logical_input(KeyEvent::from(KeyCode::Up)),
            Some(LogicalInput::RightUp)
        );
        assert_eq!(
            logical_input(KeyEvent::from(KeyCode::Char('k'))),
            Some(LogicalInput::RightDown)
        );
        assert_eq!(logical_input(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
