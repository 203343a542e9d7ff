//! Movement actions and their key bindings

use macroquad::input::KeyCode;

/// Directions a player can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
    ];

    /// Arrow key first, then the WASD equivalent
    pub fn bindings(self) -> [KeyCode; 2] {
        match self {
            Action::MoveUp => [KeyCode::Up, KeyCode::W],
            Action::MoveDown => [KeyCode::Down, KeyCode::S],
            Action::MoveLeft => [KeyCode::Left, KeyCode::A],
            Action::MoveRight => [KeyCode::Right, KeyCode::D],
        }
    }
}

/// Number a key stands for, main row or keypad
pub fn digit(key: KeyCode) -> Option<u32> {
    let n = match key {
        KeyCode::Key0 | KeyCode::Kp0 => 0,
        KeyCode::Key1 | KeyCode::Kp1 => 1,
        KeyCode::Key2 | KeyCode::Kp2 => 2,
        KeyCode::Key3 | KeyCode::Kp3 => 3,
        KeyCode::Key4 | KeyCode::Kp4 => 4,
        KeyCode::Key5 | KeyCode::Kp5 => 5,
        KeyCode::Key6 | KeyCode::Kp6 => 6,
        KeyCode::Key7 | KeyCode::Kp7 => 7,
        KeyCode::Key8 | KeyCode::Kp8 => 8,
        KeyCode::Key9 | KeyCode::Kp9 => 9,
        _ => return None,
    };
    Some(n)
}
