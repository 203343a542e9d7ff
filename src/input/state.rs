//! Held-key snapshot

use std::collections::HashSet;
use macroquad::input::{get_keys_down, KeyCode};
use macroquad::math::Vec2;
use super::Action;

/// Keys held down at the start of the frame
#[derive(Debug, Clone, Default)]
pub struct Keys {
    down: HashSet<KeyCode>,
}

impl Keys {
    /// Read the keyboard. Call once per frame.
    pub fn poll() -> Self {
        Self { down: get_keys_down() }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Check if any binding of `action` is held
    pub fn action_down(&self, action: Action) -> bool {
        action.bindings().iter().any(|k| self.is_down(*k))
    }
}

impl FromIterator<KeyCode> for Keys {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self { down: iter.into_iter().collect() }
    }
}

/// Steering direction from held movement keys, screen axes (y grows down).
///
/// Each axis is independent and the result is not normalized, so a diagonal
/// is faster than a straight line. Opposite keys cancel.
pub fn steer(keys: &Keys) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if keys.action_down(Action::MoveUp) {
        dir.y -= 1.0;
    }
    if keys.action_down(Action::MoveDown) {
        dir.y += 1.0;
    }
    if keys.action_down(Action::MoveLeft) {
        dir.x -= 1.0;
    }
    if keys.action_down(Action::MoveRight) {
        dir.x += 1.0;
    }
    dir
}
