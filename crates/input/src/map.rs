//! Key mapping from terminal events to command symbols.
//!
//! The game loop works on plain symbols (`a`, `d`, `s`, `w`, space, `q`), so
//! this layer only normalises what the terminal reports. Unknown characters
//! are passed through and rejected later as invalid commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to the symbol the game loop reads.
///
/// Returns `None` for key releases and for keys that carry no character.
pub fn symbol_for_key(key: KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some('q');
    }
    match key.code {
        // Arrow keys as aliases for the letter bindings
        KeyCode::Left => Some('a'),
        KeyCode::Right => Some('d'),
        KeyCode::Down => Some('s'),
        KeyCode::Up => Some('w'),
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_letter_keys_pass_through() {
        for c in ['a', 'd', 's', 'w', ' ', 'q', 'x'] {
            assert_eq!(symbol_for_key(KeyEvent::from(KeyCode::Char(c))), Some(c));
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(symbol_for_key(KeyEvent::from(KeyCode::Left)), Some('a'));
        assert_eq!(symbol_for_key(KeyEvent::from(KeyCode::Right)), Some('d'));
        assert_eq!(symbol_for_key(KeyEvent::from(KeyCode::Down)), Some('s'));
        assert_eq!(symbol_for_key(KeyEvent::from(KeyCode::Up)), Some('w'));
        assert_eq!(symbol_for_key(KeyEvent::from(KeyCode::F(1))), None);
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(ctrl_c));
        assert_eq!(symbol_for_key(ctrl_c), Some('q'));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = KeyEvent::from(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(symbol_for_key(key), None);
    }
}
