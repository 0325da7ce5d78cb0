use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Key(Key),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::Key(Key::Up),
            KeyCode::Down => KeyAction::Key(Key::Down),
            KeyCode::Left => KeyAction::Key(Key::Left),
            KeyCode::Right => KeyAction::Key(Key::Right),
            KeyCode::Enter => KeyAction::Key(Key::Enter),
            KeyCode::Esc => KeyAction::Key(Key::Escape),
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), KeyAction::Key(Key::Up));
        assert_eq!(press(KeyCode::Down), KeyAction::Key(Key::Down));
        assert_eq!(press(KeyCode::Left), KeyAction::Key(Key::Left));
        assert_eq!(press(KeyCode::Right), KeyAction::Key(Key::Right));
    }

    #[test]
    fn test_enter_and_escape() {
        assert_eq!(press(KeyCode::Enter), KeyAction::Key(Key::Enter));
        assert_eq!(press(KeyCode::Esc), KeyAction::Key(Key::Escape));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(press(KeyCode::Char('w')), KeyAction::None);
        assert_eq!(press(KeyCode::Char('q')), KeyAction::None);
        assert_eq!(press(KeyCode::Char(' ')), KeyAction::None);
        assert_eq!(press(KeyCode::Tab), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(plain_c), KeyAction::None);
    }
}
