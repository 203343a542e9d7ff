//! A red circle that moves with the arrow keys. Escape leaves.

use macroquad::color::{BLACK, RED};
use macroquad::math::Vec2;
use crate::geometry::{clamp, expand, Rect};
use crate::input::steer;
use crate::runtime::{Context, Game, Signal};
use crate::screen::Screen;
use super::Entry;

pub struct CircleGame {
    pos: Vec2,
    radius: f32,
    /// Pixels per second
    speed: f32,
}

impl CircleGame {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, radius: 40.0, speed: 300.0 }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }
}

impl Game for CircleGame {
    fn step(&mut self, cx: &mut Context) -> Signal {
        if cx.escaped() {
            return Signal::Completed;
        }
        cx.screen.fill(BLACK);
        cx.screen.circle(self.pos, self.radius, RED);

        self.pos += steer(&cx.keys) * self.speed * cx.dt;
        self.pos = clamp(self.pos, expand(cx.screen.rect(), -self.radius));
        Signal::Continue
    }
}

impl Entry for CircleGame {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn preview(&mut self, screen: &mut dyn Screen, rect: Rect) {
        screen.circle(rect.center(), rect.w.min(rect.h) / 2.0, RED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::input::KeyCode;
    use macroquad::math::vec2;
    use crate::input::{Event, Keys};
    use crate::screen::recorder::{Draw, Recorder};

    fn step(game: &mut CircleGame, keys: &[KeyCode], dt: f32) -> Recorder {
        let mut screen = Recorder::new(1280.0, 720.0);
        let mut cx = Context::new(&mut screen, Vec::new(), keys.iter().copied().collect(), dt);
        game.step(&mut cx);
        screen
    }

    #[test]
    fn test_draws_then_moves() {
        let mut game = CircleGame::new(vec2(640.0, 360.0));
        let screen = step(&mut game, &[KeyCode::S], 0.5);
        assert_eq!(
            screen.draws,
            vec![
                Draw::Fill(BLACK),
                Draw::Circle { center: vec2(640.0, 360.0), radius: 40.0 },
            ]
        );
        assert_eq!(game.pos(), vec2(640.0, 510.0));
    }

    #[test]
    fn test_stays_on_screen() {
        let mut game = CircleGame::new(vec2(640.0, 360.0));
        step(&mut game, &[KeyCode::Left, KeyCode::Up], 10.0);
        assert_eq!(game.pos(), vec2(40.0, 40.0));
    }

    #[test]
    fn test_escape_leaves_without_drawing() {
        let mut game = CircleGame::new(vec2(640.0, 360.0));
        let mut screen = Recorder::new(1280.0, 720.0);
        let events = vec![Event::KeyDown(KeyCode::Escape)];
        let mut cx = Context::new(&mut screen, events, Keys::from_iter([KeyCode::Right]), 1.0);
        assert_eq!(game.step(&mut cx), Signal::Completed);
        assert_eq!(game.pos(), vec2(640.0, 360.0));
        assert!(screen.draws.is_empty());
    }

    #[test]
    fn test_preview_is_a_circle_in_the_box() {
        let mut game = CircleGame::new(vec2(640.0, 360.0));
        let mut screen = Recorder::new(1280.0, 720.0);
        game.preview(&mut screen, Rect::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(screen.draws, vec![Draw::Circle { center: vec2(50.0, 30.0), radius: 30.0 }]);
    }
}
