//! Per-frame context

use macroquad::input::KeyCode;
use macroquad::math::Vec2;
use crate::input::{Event, Keys};
use crate::screen::Screen;

/// Everything a game sees in one frame. Built fresh by the runner every frame.
pub struct Context<'a> {
    pub screen: &'a mut dyn Screen,
    /// Events since the previous frame, oldest first
    pub events: Vec<Event>,
    /// Keys held down this frame
    pub keys: Keys,
    /// Seconds the previous frame took
    pub dt: f32,
}

impl<'a> Context<'a> {
    pub fn new(screen: &'a mut dyn Screen, events: Vec<Event>, keys: Keys, dt: f32) -> Self {
        Self { screen, events, keys, dt }
    }

    /// Keys pressed this frame, in order
    pub fn pressed(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.events.iter().filter_map(Event::key_down)
    }

    /// Left clicks this frame, in screen pixels
    pub fn clicks(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.events.iter().filter_map(Event::click)
    }

    /// Escape was pressed: the player wants out of the current game
    pub fn escaped(&self) -> bool {
        self.pressed().any(|key| key == KeyCode::Escape)
    }
}
