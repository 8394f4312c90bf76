//! Key mapping from terminal events to puzzle intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map an arrow key to a puzzle intent.
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Left => Some(Intent::MoveLeft),
        KeyCode::Right => Some(Intent::MoveRight),
        KeyCode::Down => Some(Intent::SoftDrop),
        KeyCode::Up => Some(Intent::Rotate),
        _ => None,
    }
}

/// Escape leaves the game (handled by the UI, never by the engine).
pub fn is_exit_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Digit pressed on the game menu, if any.
pub fn menu_choice(key: KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Char(c) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

/// Check if key should quit the host.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Intent::MoveRight)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Intent::SoftDrop)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Intent::Rotate)
        );
    }

    #[test]
    fn test_other_keys_are_not_intents() {
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Char('h'))), None);
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Esc)), None);
    }

    #[test]
    fn test_exit_and_menu_keys() {
        assert!(is_exit_key(KeyEvent::from(KeyCode::Esc)));
        assert!(!is_exit_key(KeyEvent::from(KeyCode::Left)));
        assert_eq!(menu_choice(KeyEvent::from(KeyCode::Char('1'))), Some(1));
        assert_eq!(menu_choice(KeyEvent::from(KeyCode::Char('x'))), None);
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
