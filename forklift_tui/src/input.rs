use forklift_core::warehouse::Command;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates a key press into a yard command.
///
/// Releases and repeats are ignored, as are keys without a binding.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Char(' ') => Some(Command::Interact),
        // Raw mode delivers Ctrl-C as a key, so treat it like closing the window.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('r' | 'R')
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Command::ResetSupply)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_move() {
        assert_eq!(command_for(press(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(command_for(press(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(command_for(press(KeyCode::Up)), Some(Command::MoveUp));
        assert_eq!(command_for(press(KeyCode::Down)), Some(Command::MoveDown));
    }

    #[test]
    fn space_and_r() {
        assert_eq!(command_for(press(KeyCode::Char(' '))), Some(Command::Interact));
        assert_eq!(
            command_for(press(KeyCode::Char('r'))),
            Some(Command::ResetSupply)
        );
    }

    #[test]
    fn restock_ignores_case_but_not_chords() {
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(Command::ResetSupply)
        );
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for(release), None);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(command_for(press(KeyCode::Enter)), None);
        assert_eq!(command_for(press(KeyCode::Char('x'))), None);
    }
}
