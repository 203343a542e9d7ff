//! Drawing surface handed to games each frame
//!
//! Games never call macroquad's draw functions directly; they draw through
//! [`Screen`] so their frame logic runs the same with or without a window.

use macroquad::color::{Color, WHITE};
use macroquad::math::{vec2, Vec2};
use macroquad::texture::{draw_texture_ex, DrawTextureParams};
use crate::geometry::Rect;
use crate::texture::Image;

pub trait Screen {
    /// Drawable size in pixels
    fn size(&self) -> Vec2;

    fn fill(&mut self, color: Color);

    /// Draw `image` stretched to `size` with its top-left corner at `pos`
    fn blit(&mut self, image: &mut Image, pos: Vec2, size: Vec2);

    fn circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Filled rectangle
    fn rectangle(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2, font_size: u16, color: Color);

    /// Width and height `text` would take up
    fn measure(&self, text: &str, font_size: u16) -> Vec2;

    fn rect(&self) -> Rect {
        Rect::screen(self.size())
    }
}

/// The macroquad window
pub struct WindowScreen {
    size: Vec2,
}

impl WindowScreen {
    /// Snapshot of the window at its current size
    pub fn current() -> Self {
        Self {
            size: vec2(
                macroquad::window::screen_width(),
                macroquad::window::screen_height(),
            ),
        }
    }
}

impl Screen for WindowScreen {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill(&mut self, color: Color) {
        macroquad::window::clear_background(color);
    }

    fn blit(&mut self, image: &mut Image, pos: Vec2, size: Vec2) {
        let texture = image.scale(size);
        draw_texture_ex(
            texture,
            pos.x,
            pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(size),
                ..Default::default()
            },
        );
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        macroquad::shapes::draw_circle(center.x, center.y, radius, color);
    }

    fn rectangle(&mut self, rect: Rect, color: Color) {
        macroquad::shapes::draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn text(&mut self, text: &str, pos: Vec2, font_size: u16, color: Color) {
        // macroquad places text by its baseline
        let dims = macroquad::text::measure_text(text, None, font_size, 1.0);
        macroquad::text::draw_text(text, pos.x, pos.y + dims.offset_y, font_size as f32, color);
    }

    fn measure(&self, text: &str, font_size: u16) -> Vec2 {
        let dims = macroquad::text::measure_text(text, None, font_size, 1.0);
        vec2(dims.width, dims.height)
    }
}
