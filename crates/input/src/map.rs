//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Quit keys are handled by [`should_quit`]; call it first so Ctrl-C is not
/// read as a plain `c`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => Some(GameAction::Check),
        KeyCode::Esc => Some(GameAction::CancelDrag),
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
    fn test_check_keys() {
        for code in [KeyCode::Char('c'), KeyCode::Char('C'), KeyCode::Enter] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(GameAction::Check)
            );
        }
    }

    #[test]
    fn test_escape_cancels_drag() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::CancelDrag)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
