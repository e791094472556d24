//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Command;

/// Map keyboard input to a command for the active piece.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Command::MoveRight),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Command::SoftDrop),
        KeyCode::Up
        | KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Command::RotateClockwise),
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(Command::RotateAnticlockwise)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Command::SoftDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('d'))), Some(Command::MoveRight));
    }

    #[test]
    fn rotation_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('x'))),
            Some(Command::RotateClockwise)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Command::RotateClockwise));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('y'))),
            Some(Command::RotateAnticlockwise)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Z'))),
            Some(Command::RotateAnticlockwise)
        );
    }

    #[test]
    fn every_listed_binding_is_mapped() {
        let bindings = [
            (KeyCode::Left, Command::MoveLeft),
            (KeyCode::Char('a'), Command::MoveLeft),
            (KeyCode::Char('h'), Command::MoveLeft),
            (KeyCode::Right, Command::MoveRight),
            (KeyCode::Char('d'), Command::MoveRight),
            (KeyCode::Char('l'), Command::MoveRight),
            (KeyCode::Down, Command::SoftDrop),
            (KeyCode::Char('s'), Command::SoftDrop),
            (KeyCode::Char('j'), Command::SoftDrop),
            (KeyCode::Up, Command::RotateClockwise),
            (KeyCode::Char('x'), Command::RotateClockwise),
            (KeyCode::Char('w'), Command::RotateClockwise),
            (KeyCode::Char('k'), Command::RotateClockwise),
            (KeyCode::Char('y'), Command::RotateAnticlockwise),
            (KeyCode::Char('z'), Command::RotateAnticlockwise),
        ];
        for (code, command) in bindings {
            assert_eq!(map_key(KeyEvent::from(code)), Some(command), "{:?}", code);
        }
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
