//! Per-frame input events

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::input::{KeyCode, MouseButton};
use macroquad::math::{vec2, Vec2};
use macroquad::miniquad::{EventHandler, KeyMods};

/// Something that happened since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Key went down (auto-repeat is not reported)
    KeyDown(KeyCode),
    /// Left mouse button went down here
    Click(Vec2),
    /// Window now has this size
    Resized(Vec2),
}

impl Event {
    pub fn key_down(&self) -> Option<KeyCode> {
        match self {
            Event::KeyDown(key) => Some(*key),
            _ => None,
        }
    }

    pub fn click(&self) -> Option<Vec2> {
        match self {
            Event::Click(pos) => Some(*pos),
            _ => None,
        }
    }
}

/// Collects key presses and clicks from macroquad's input queue
pub struct EventPump {
    subscriber: usize,
    pending: Vec<Event>,
}

impl EventPump {
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            pending: Vec::new(),
        }
    }

    /// All queued events since the last call, in arrival order
    pub fn drain(&mut self) -> Vec<Event> {
        let subscriber = self.subscriber;
        repeat_all_miniquad_input(self, subscriber);
        std::mem::take(&mut self.pending)
    }
}

impl EventHandler for EventPump {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if !repeat {
            self.pending.push(Event::KeyDown(keycode));
        }
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.pending.push(Event::Click(vec2(x, y)));
        }
    }
}
