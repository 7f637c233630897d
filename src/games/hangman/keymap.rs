//! Key bindings for the terminal front end.
//!
//! Letters guess while a round is running. Once it is over, Enter plays again and
//! `n` starts a new game. Ctrl+R and Ctrl+N work at any time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::game::Status;
use super::session::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
}

pub fn action_for_key(key: KeyEvent, status: Status) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let over = status.is_over();

    match key.code {
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') if ctrl => Some(KeyAction::Quit),
        KeyCode::Char('r') if ctrl => Some(KeyAction::Command(Command::ResetRound)),
        KeyCode::Char('n') if ctrl => Some(KeyAction::Command(Command::NewGame)),
        KeyCode::Enter if over => Some(KeyAction::Command(Command::ResetRound)),
        KeyCode::Char('n' | 'N') if over => Some(KeyAction::Command(Command::NewGame)),
        KeyCode::Char(c) if !ctrl && !over && c.is_ascii_alphabetic() => {
            Some(KeyAction::Command(Command::Guess(c)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_letters_guess_while_playing() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('E')), Status::InProgress),
            Some(KeyAction::Command(Command::Guess('E')))
        );
        assert_eq!(action_for_key(key(KeyCode::Char('5')), Status::InProgress), None);
        assert_eq!(action_for_key(key(KeyCode::Enter), Status::InProgress), None);
    }

    #[test]
    fn test_round_over_keys() {
        for status in [Status::Won, Status::Lost] {
            assert_eq!(
                action_for_key(key(KeyCode::Enter), status),
                Some(KeyAction::Command(Command::ResetRound))
            );
            assert_eq!(
                action_for_key(key(KeyCode::Char('n')), status),
                Some(KeyAction::Command(Command::NewGame))
            );
            assert_eq!(action_for_key(key(KeyCode::Char('a')), status), None);
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(ctrl('c'), Status::InProgress), Some(KeyAction::Quit));
        assert_eq!(
            action_for_key(ctrl('r'), Status::InProgress),
            Some(KeyAction::Command(Command::ResetRound))
        );
        assert_eq!(
            action_for_key(ctrl('n'), Status::Won),
            Some(KeyAction::Command(Command::NewGame))
        );
        assert_eq!(action_for_key(ctrl('x'), Status::InProgress), None);
        assert_eq!(action_for_key(key(KeyCode::Esc), Status::Lost), Some(KeyAction::Quit));
    }
}
