//! Things on the field

use macroquad::math::Vec2;
use crate::geometry::{overlap, within, HITBOX_FRACTION};
use crate::screen::Screen;
use super::{Camera, Sprites};

/// Something sitting on the field, positioned by its center
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub pos: Vec2,
    pub size: Vec2,
    /// Index into [`Sprites`]
    pub image: usize,
}

impl Item {
    pub fn new(pos: Vec2, size: Vec2, image: usize) -> Self {
        Self { pos, size, image }
    }

    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }

    pub fn draw(&self, screen: &mut dyn Screen, sprites: &mut Sprites, camera: &Camera) {
        let top_left = camera.to_screen(self.pos - self.size / 2.0);
        screen.blit(sprites.image_mut(self.image), top_left, self.size * camera.scale);
    }
}

/// An item that moves
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Item,
    /// Field units per second
    pub speed: f32,
}

/// How the player touches an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hitbox {
    /// Boxes around each center, a third of the full size in every direction
    Boxes,
    /// Circles of half the width, strictly overlapping
    Circles,
}

impl Hitbox {
    pub fn touches(self, a: &Item, b: &Item) -> bool {
        match self {
            Hitbox::Boxes => overlap(a.pos, b.pos, a.size * HITBOX_FRACTION, b.size * HITBOX_FRACTION),
            Hitbox::Circles => within(a.pos, b.pos, a.radius() + b.radius()),
        }
    }
}
