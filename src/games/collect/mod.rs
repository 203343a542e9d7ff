//! Collecting games
//!
//! The player steers a sprite around a field and eats everything on it. When
//! the field is empty, a new round starts with fresh items. Two flavours:
//!
//! - **Mouse**: the field is the window, measured in pixels, sprites at
//!   double size, box hitboxes
//! - **Map**: a fixed 42x24 map scaled to fit the window, round hitboxes
//!
//! Escape leaves the game; coming back starts a fresh round.

mod entity;
mod session;

pub use entity::{Hitbox, Item, Player};
pub use session::{Camera, Layout, Session, View};

use macroquad::math::{vec2, Vec2};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::{AssetSettings, MapSettings, MouseSettings, RoundSettings, Settings};
use crate::error::GameError;
use crate::geometry::Rect;
use crate::runtime::{Context, Game, Signal};
use crate::screen::Screen;
use crate::texture::{Image, Picture};
use super::Entry;

/// Player and item sprites, plus how often each item turns up
pub struct Sprites {
    images: Vec<Image>,
    choice: WeightedIndex<f32>,
}

impl Sprites {
    /// The player is image 0, items follow in order
    pub fn new(player: Image, items: Vec<(Image, f32)>) -> Result<Self, GameError> {
        let choice = WeightedIndex::new(items.iter().map(|(_, w)| *w))
            .map_err(|e| GameError::Config(format!("item weights: {}", e)))?;
        let mut images = vec![player];
        images.extend(items.into_iter().map(|(image, _)| image));
        Ok(Self { images, choice })
    }

    pub async fn load(assets: &AssetSettings) -> Result<Self, GameError> {
        let player = Image::new(Picture::load(&assets.player).await?);
        let mut items = Vec::with_capacity(assets.items.len());
        for item in &assets.items {
            items.push((Image::new(Picture::load(&item.path).await?), item.weight));
        }
        let sprites = Self::new(player, items)?;
        if sprites.images[1..].iter().any(|i| i.size() != sprites.item_size()) {
            log::warn!("Item sprites differ in size; all are drawn at the first one's size");
        }
        Ok(sprites)
    }

    pub fn player(&self) -> usize {
        0
    }

    pub fn player_size(&self) -> Vec2 {
        self.images[0].size()
    }

    /// Native size of the first item sprite
    pub fn item_size(&self) -> Vec2 {
        self.images[1].size()
    }

    /// Random item sprite, by weight
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        1 + self.choice.sample(rng)
    }

    pub fn image_mut(&mut self, index: usize) -> &mut Image {
        &mut self.images[index]
    }

    /// The player, with the first item tucked into its lower-left quarter
    fn preview(&mut self, screen: &mut dyn Screen, rect: Rect) {
        screen.blit(&mut self.images[0], rect.origin(), rect.size());
        let corner = vec2(rect.x, rect.y + rect.h / 2.0);
        screen.blit(&mut self.images[1], corner, rect.size() / 2.0);
    }
}

/// Which collecting game this is
#[derive(Debug, Clone, PartialEq)]
pub enum Flavour {
    Mouse(MouseSettings),
    Map(MapSettings),
}

impl Flavour {
    /// Field for a new round on a screen of `screen`
    pub fn layout(&self, screen: Rect, sprites: &Sprites) -> Layout {
        match self {
            Flavour::Mouse(mouse) => Layout {
                area: screen,
                view: View::Pixels,
                player_size: sprites.player_size() * mouse.sprite_scale,
                item_size: sprites.item_size() * mouse.sprite_scale,
                speed: mouse.speed,
                hitbox: Hitbox::Boxes,
            },
            Flavour::Map(map) => Layout {
                area: Rect::new(0.0, 0.0, map.width, map.height),
                view: View::Fit,
                player_size: Vec2::splat(2.0 * map.player_radius),
                item_size: Vec2::splat(2.0 * map.item_radius),
                speed: map.speed,
                hitbox: Hitbox::Circles,
            },
        }
    }
}

/// Whether a round is being played
enum Round {
    Idle,
    Active(Session),
}

/// Plays rounds back to back, forever
pub struct CollectGame {
    sprites: Sprites,
    flavour: Flavour,
    rounds: RoundSettings,
    rng: StdRng,
    round: Round,
    played: u32,
}

impl CollectGame {
    pub fn new(sprites: Sprites, flavour: Flavour, rounds: RoundSettings, rng: StdRng) -> Self {
        Self {
            sprites,
            flavour,
            rounds,
            rng,
            round: Round::Idle,
            played: 0,
        }
    }

    /// Mouse and cheese on the whole window
    pub async fn mouse(settings: Settings) -> Result<Self, GameError> {
        let sprites = Sprites::load(&settings.assets).await?;
        let flavour = Flavour::Mouse(settings.mouse);
        Ok(Self::new(sprites, flavour, settings.rounds, StdRng::from_entropy()))
    }

    /// Collecting on the fixed map
    pub async fn map(settings: Settings) -> Result<Self, GameError> {
        let sprites = Sprites::load(&settings.assets).await?;
        let flavour = Flavour::Map(settings.map);
        Ok(Self::new(sprites, flavour, settings.rounds, StdRng::from_entropy()))
    }

    /// Rounds finished so far
    pub fn rounds_played(&self) -> u32 {
        self.played
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.round {
            Round::Active(session) => Some(session),
            Round::Idle => None,
        }
    }

    fn start_round(&mut self, screen: Rect) -> Session {
        let layout = self.flavour.layout(screen, &self.sprites);
        log::info!("Round {} starts with {} items", self.played + 1, self.rounds.items);
        Session::random(&layout, &self.sprites, &mut self.rng, self.rounds.items, self.rounds.timeout)
    }
}

impl Game for CollectGame {
    fn step(&mut self, cx: &mut Context) -> Signal {
        if cx.escaped() {
            self.round = Round::Idle;
            return Signal::Completed;
        }

        if let Round::Idle = self.round {
            let session = self.start_round(cx.screen.rect());
            self.round = Round::Active(session);
        }

        if let Round::Active(session) = &mut self.round {
            if session.step(cx, &mut self.sprites) == Signal::Completed {
                self.played += 1;
                log::info!("Round {} over, score {}", self.played, session.score());
                self.round = Round::Idle;
            }
        }

        Signal::Continue
    }
}

impl Entry for CollectGame {
    fn name(&self) -> &'static str {
        match self.flavour {
            Flavour::Mouse(_) => "mouse",
            Flavour::Map(_) => "collecting",
        }
    }

    fn preview(&mut self, screen: &mut dyn Screen, rect: Rect) {
        self.sprites.preview(screen, rect);
    }
}
