//! Counting game
//!
//! Type a number and see that many apples, grouped in fives. `-` and `=` step
//! the number down and up. Nothing to win: the picture always matches the
//! number. Escape leaves.

use macroquad::color::WHITE;
use macroquad::input::KeyCode;
use macroquad::math::{vec2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::{CountingSettings, Settings};
use crate::error::GameError;
use crate::geometry::Rect;
use crate::input::digit;
use crate::runtime::{Context, Game, Signal};
use crate::screen::Screen;
use crate::texture::{Image, Picture};
use super::Entry;

/// Largest number shown
pub const MAX: u32 = 10;

/// Items per group
const GROUP: usize = 5;

pub struct CountingGame {
    sprites: Vec<Image>,
    /// Sprite being counted
    item: usize,
    number: u32,
    settings: CountingSettings,
}

impl CountingGame {
    /// Starts on a random number in 1..=9 with a random sprite
    pub fn new<R: Rng + ?Sized>(
        sprites: Vec<Image>,
        settings: CountingSettings,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if sprites.is_empty() {
            return Err(GameError::Config("counting needs at least one sprite".to_string()));
        }
        Ok(Self {
            item: rng.gen_range(0..sprites.len()),
            number: rng.gen_range(1..=9),
            sprites,
            settings,
        })
    }

    pub async fn load(settings: Settings) -> Result<Self, GameError> {
        let mut sprites = Vec::with_capacity(settings.assets.counters.len());
        for path in &settings.assets.counters {
            sprites.push(Image::new(Picture::load(path).await?));
        }
        Self::new(sprites, settings.counting, &mut StdRng::from_entropy())
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// React to one key press
    pub fn press(&mut self, key: KeyCode) {
        if let Some(n) = digit(key) {
            self.number = n;
            return;
        }
        match key {
            KeyCode::Minus | KeyCode::KpSubtract => self.number = self.number.saturating_sub(1),
            KeyCode::Equal | KeyCode::KpAdd => self.number = (self.number + 1).min(MAX),
            _ => {}
        }
    }

    fn draw(&mut self, screen: &mut dyn Screen) {
        let view = screen.size();
        let font_size = self.settings.font_size;
        screen.fill(macroquad::color::BLACK);

        let image = &mut self.sprites[self.item];
        let size = image.size() * self.settings.sprite_scale;
        for pos in row(self.number as usize, size, self.settings.padding, view) {
            screen.blit(image, pos, size);
        }

        let equals = screen.measure("=", font_size);
        screen.text("=", view / 2.0 - equals / 2.0, font_size, WHITE);

        let numeral = self.number.to_string();
        let numeral_size = screen.measure(&numeral, font_size);
        let at = vec2(view.x / 2.0, 3.0 * view.y / 4.0);
        screen.text(&numeral, at - numeral_size / 2.0, font_size, WHITE);
    }
}

/// Top-left corners of `n` sprites of `size` in a row centred on the upper
/// quarter of `view`. Each group of five after the first is pushed two extra
/// paddings to the right.
pub fn row(n: usize, size: Vec2, padding: f32, view: Vec2) -> Vec<Vec2> {
    let width = padding * (n + n / GROUP) as f32 + size.x * n as f32;
    let left = view.x / 2.0 - width / 2.0;
    let y = view.y / 4.0 - size.y / 2.0;
    (0..n)
        .map(|i| {
            let gaps = (i + 2 * (i / GROUP)) as f32;
            vec2(left + padding * gaps + size.x * i as f32, y)
        })
        .collect()
}

impl Game for CountingGame {
    fn step(&mut self, cx: &mut Context) -> Signal {
        if cx.escaped() {
            return Signal::Completed;
        }
        for key in cx.pressed() {
            self.press(key);
        }
        self.draw(&mut *cx.screen);
        Signal::Continue
    }
}

impl Entry for CountingGame {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn preview(&mut self, screen: &mut dyn Screen, rect: Rect) {
        screen.blit(&mut self.sprites[self.item], rect.origin(), rect.size());
    }
}
