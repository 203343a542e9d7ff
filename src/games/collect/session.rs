//! One round of collecting

use macroquad::color::{BLACK, DARKGRAY, WHITE};
use macroquad::math::Vec2;
use rand::Rng;
use crate::geometry::{clamp, expand, random_uniform, Rect};
use crate::input::{steer, Keys};
use crate::runtime::{Context, Signal};
use crate::screen::Screen;
use super::{Hitbox, Item, Player, Sprites};

/// Counter text size and distance from the window edges
const COUNTER_FONT: u16 = 80;
const COUNTER_MARGIN: f32 = 10.0;

/// How the field is put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Field units are window pixels
    Pixels,
    /// The whole field is scaled to fit the window and centred, over a
    /// grey background
    Fit,
}

impl View {
    /// Mapping from `area` onto `screen` for this frame
    pub fn camera(self, area: Rect, screen: Rect) -> Camera {
        match self {
            View::Pixels => Camera { scale: 1.0, offset: Vec2::ZERO },
            View::Fit => {
                let scale = (screen.size() / area.size()).min_element();
                Camera {
                    scale,
                    offset: screen.center() - area.center() * scale,
                }
            }
        }
    }
}

/// Field units to screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Pixels per field unit
    pub scale: f32,
    /// Where the field origin lands
    pub offset: Vec2,
}

impl Camera {
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }
}

/// Field geometry for a round, in field units
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub area: Rect,
    pub view: View,
    pub player_size: Vec2,
    pub item_size: Vec2,
    pub speed: f32,
    pub hitbox: Hitbox,
}

/// A player, the items still on the field, and the score so far.
///
/// Once the field is empty the round lingers for `timeout` seconds, then
/// reports [`Signal::Completed`].
pub struct Session {
    area: Rect,
    view: View,
    hitbox: Hitbox,
    player: Player,
    items: Vec<Item>,
    timeout: f32,
    counter: u32,
}

impl Session {
    /// Player starts at the center of the area
    pub fn new(layout: &Layout, player_image: usize, items: Vec<Item>, timeout: f32) -> Self {
        Self {
            area: layout.area,
            view: layout.view,
            hitbox: layout.hitbox,
            player: Player {
                body: Item::new(layout.area.center(), layout.player_size, player_image),
                speed: layout.speed,
            },
            items,
            timeout,
            counter: 0,
        }
    }

    /// Round with `count` items scattered uniformly, each fully inside the area
    pub fn random<R: Rng + ?Sized>(
        layout: &Layout,
        sprites: &Sprites,
        rng: &mut R,
        count: usize,
        timeout: f32,
    ) -> Self {
        let spawn = expand(layout.area, -layout.item_size / 2.0);
        let items = (0..count)
            .map(|_| {
                let pos = random_uniform(rng, spawn);
                Item::new(pos, layout.item_size, sprites.pick(rng))
            })
            .collect();
        Self::new(layout, sprites.player(), items, timeout)
    }

    pub fn score(&self) -> u32 {
        self.counter
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Draw, move, collect, then tick the end-of-round timer
    pub fn step(&mut self, cx: &mut Context, sprites: &mut Sprites) -> Signal {
        self.draw(&mut *cx.screen, sprites);
        self.steer(&cx.keys, cx.dt);
        self.collect();
        self.tick(cx.dt)
    }

    /// Field, items, player, then collected (left) and remaining (right)
    /// counters
    fn draw(&self, screen: &mut dyn Screen, sprites: &mut Sprites) {
        let camera = self.view.camera(self.area, screen.rect());
        screen.fill(BLACK);
        if self.view == View::Fit {
            let field = Rect::from_parts(camera.to_screen(self.area.origin()), self.area.size() * camera.scale);
            screen.rectangle(field, DARKGRAY);
        }
        for item in &self.items {
            item.draw(screen, sprites, &camera);
        }
        self.player.body.draw(screen, sprites, &camera);

        let collected = self.counter.to_string();
        screen.text(&collected, Vec2::splat(COUNTER_MARGIN), COUNTER_FONT, WHITE);
        let remaining = self.items.len().to_string();
        let width = screen.measure(&remaining, COUNTER_FONT).x;
        let right = Vec2::new(screen.size().x - COUNTER_MARGIN - width, COUNTER_MARGIN);
        screen.text(&remaining, right, COUNTER_FONT, WHITE);
    }

    fn steer(&mut self, keys: &Keys, dt: f32) {
        let body = &mut self.player.body;
        body.pos += steer(keys) * self.player.speed * dt;
        body.pos = clamp(body.pos, expand(self.area, -body.size / 2.0));
    }

    /// Remove every item the player touches, keeping the rest in order
    fn collect(&mut self) {
        let (player, hitbox) = (&self.player.body, self.hitbox);
        let counter = &mut self.counter;
        self.items.retain(|item| {
            let hit = hitbox.touches(player, item);
            if hit {
                *counter += 1;
            }
            !hit
        });
    }

    fn tick(&mut self, dt: f32) -> Signal {
        if !self.items.is_empty() {
            return Signal::Continue;
        }
        if self.timeout > 0.0 {
            self.timeout -= dt;
            Signal::Continue
        } else {
            Signal::Completed
        }
    }
}

/// 30px player and items on a pixel field
#[cfg(test)]
fn pixel_layout(w: f32, h: f32) -> Layout {
    Layout {
        area: Rect::new(0.0, 0.0, w, h),
        view: View::Pixels,
        player_size: Vec2::splat(30.0),
        item_size: Vec2::splat(30.0),
        speed: 300.0,
        hitbox: Hitbox::Boxes,
    }
}
