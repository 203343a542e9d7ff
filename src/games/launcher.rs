//! Game picker
//!
//! Every game is shown as a preview in a grid; clicking one plays it. When the
//! game ends (Escape), the grid comes back. Started with a game name, the
//! launcher plays just that game and ends with it.

use macroquad::color::{BLACK, WHITE};
use macroquad::math::{vec2, Vec2};
use macroquad::window::{screen_height, screen_width};
use crate::config::Settings;
use crate::error::GameError;
use crate::geometry::Rect;
use crate::runtime::{Context, Game, Signal};
use crate::screen::Screen;
use super::{CircleGame, CollectGame, CountingGame};

/// Names accepted on the command line, in grid order
pub const NAMES: [&str; 4] = ["circle", "mouse", "collecting", "counting"];

/// A game the launcher can list
pub trait Entry: Game {
    /// Short name, also used to pick the game on the command line
    fn name(&self) -> &'static str;

    /// Draw a still picture of the game inside `rect`
    fn preview(&mut self, screen: &mut dyn Screen, rect: Rect);
}

pub struct Launcher {
    games: Vec<Box<dyn Entry>>,
    playing: Option<usize>,
    /// Picked by name up front: leaving the game ends the launcher
    direct: bool,
}

impl Launcher {
    pub fn new(games: Vec<Box<dyn Entry>>) -> Self {
        Self { games, playing: None, direct: false }
    }

    /// Load every game's assets
    pub async fn load(settings: Settings) -> Result<Self, GameError> {
        let center = vec2(screen_width(), screen_height()) / 2.0;
        let games: Vec<Box<dyn Entry>> = vec![
            Box::new(CircleGame::new(center)),
            Box::new(CollectGame::mouse(settings.clone()).await?),
            Box::new(CollectGame::map(settings.clone()).await?),
            Box::new(CountingGame::load(settings).await?),
        ];
        Ok(Self::new(games))
    }

    /// Play the game called `name` right away, without the grid
    pub fn start(&mut self, name: &str) -> Result<(), GameError> {
        let index = self.games.iter().position(|g| g.name() == name).ok_or_else(|| {
            let names: Vec<_> = self.games.iter().map(|g| g.name()).collect();
            GameError::Config(format!("no game \"{}\", available: {}", name, names.join(", ")))
        })?;
        self.playing = Some(index);
        self.direct = true;
        Ok(())
    }

    /// Name of the game being played, if any
    pub fn playing(&self) -> Option<&'static str> {
        self.playing.map(|i| self.games[i].name())
    }

    fn draw(&mut self, screen: &mut dyn Screen, cells: &[Rect]) {
        screen.fill(BLACK);
        for (game, cell) in self.games.iter_mut().zip(cells) {
            let side = cell.w.min(cell.h);
            let preview = side / 2.0;
            let center = cell.center();
            game.preview(screen, Rect::from_parts(center - Vec2::splat(preview / 2.0), Vec2::splat(preview)));

            let font_size = (side / 10.0) as u16;
            let label = screen.measure(game.name(), font_size);
            let pos = vec2(center.x - label.x / 2.0, cell.bottom() - side / 20.0 - label.y);
            screen.text(game.name(), pos, font_size, WHITE);
        }
    }
}

impl Game for Launcher {
    fn step(&mut self, cx: &mut Context) -> Signal {
        if let Some(index) = self.playing {
            if self.games[index].step(cx) == Signal::Completed {
                self.playing = None;
                if self.direct {
                    return Signal::Completed;
                }
                log::info!("Back to the games");
            }
            return Signal::Continue;
        }

        let cells = grid(cx.screen.size(), self.games.len(), 1.0);
        self.draw(&mut *cx.screen, &cells);
        // The game starts next frame, on a clean screen
        if let Some(index) = cx.clicks().find_map(|p| cells.iter().position(|c| c.contains(p))) {
            log::info!("Starting {}", self.games[index].name());
            self.playing = Some(index);
        }
        Signal::Continue
    }
}

/// Split `size` into at least `n` equal cells, row by row, and return the
/// first `n`. Columns or rows are added one at a time, whichever keeps the
/// cells closest to `aspect` (width over height).
pub fn grid(size: Vec2, n: usize, aspect: f32) -> Vec<Rect> {
    let (mut columns, mut rows) = (1usize, 1usize);
    while columns * rows < n {
        let cell = size / vec2(columns as f32, rows as f32);
        if cell.x >= cell.y * aspect {
            columns += 1;
        } else {
            rows += 1;
        }
    }

    let cell = size / vec2(columns as f32, rows as f32);
    (0..n)
        .map(|i| {
            let (column, row) = (i % columns, i / columns);
            Rect::new(cell.x * column as f32, cell.y * row as f32, cell.x, cell.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use macroquad::input::KeyCode;
    use rand::{rngs::StdRng, SeedableRng};
    use crate::config::{CountingSettings, MapSettings, MouseSettings, RoundSettings};
    use crate::games::collect::{tests::sprites, Flavour};
    use crate::input::Event;
    use crate::screen::recorder::{Draw, Recorder};
    use crate::texture::{Image, Picture};

    fn launcher() -> Launcher {
        let rounds = RoundSettings::default();
        let rng = || StdRng::seed_from_u64(1);
        let counters = vec![Image::new(Picture::new(RgbaImage::new(8, 8)))];
        Launcher::new(vec![
            Box::new(CircleGame::new(vec2(640.0, 360.0))),
            Box::new(CollectGame::new(sprites(), Flavour::Mouse(MouseSettings::default()), rounds.clone(), rng())),
            Box::new(CollectGame::new(sprites(), Flavour::Map(MapSettings::default()), rounds, rng())),
            Box::new(CountingGame::new(counters, CountingSettings::default(), &mut rng()).unwrap()),
        ])
    }

    fn step(launcher: &mut Launcher, events: Vec<Event>) -> (Signal, Recorder) {
        let mut screen = Recorder::new(1280.0, 720.0);
        let mut cx = Context::new(&mut screen, events, Default::default(), 0.016);
        let signal = launcher.step(&mut cx);
        (signal, screen)
    }

    #[test]
    fn test_grid_four_in_a_wide_window() {
        let cells = grid(vec2(1280.0, 720.0), 4, 1.0);
        assert_eq!(
            cells,
            vec![
                Rect::new(0.0, 0.0, 640.0, 360.0),
                Rect::new(640.0, 0.0, 640.0, 360.0),
                Rect::new(0.0, 360.0, 640.0, 360.0),
                Rect::new(640.0, 360.0, 640.0, 360.0),
            ]
        );
    }

    #[test]
    fn test_grid_leaves_spare_cells_empty() {
        let cells = grid(vec2(1280.0, 720.0), 3, 1.0);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2], Rect::new(0.0, 360.0, 640.0, 360.0));

        assert_eq!(grid(vec2(1280.0, 720.0), 1, 1.0), vec![Rect::new(0.0, 0.0, 1280.0, 720.0)]);
        assert!(grid(vec2(1280.0, 720.0), 0, 1.0).is_empty());
    }

    #[test]
    fn test_names_match_the_command_line() {
        let launcher = launcher();
        let names: Vec<_> = launcher.games.iter().map(|g| g.name()).collect();
        assert_eq!(names, NAMES);
    }

    #[test]
    fn test_menu_draws_every_game() {
        let mut launcher = launcher();
        let (signal, screen) = step(&mut launcher, Vec::new());
        assert_eq!(signal, Signal::Continue);
        assert_eq!(screen.draws[0], Draw::Fill(BLACK));
        assert_eq!(screen.texts(), NAMES);
        assert!(screen.draws.contains(&Draw::Circle { center: vec2(320.0, 180.0), radius: 90.0 }));
        assert_eq!(launcher.playing(), None);
    }

    #[test]
    fn test_click_plays_and_escape_returns() {
        let mut launcher = launcher();
        step(&mut launcher, vec![Event::Click(vec2(700.0, 500.0))]);
        assert_eq!(launcher.playing(), Some("counting"));

        let (signal, _) = step(&mut launcher, vec![Event::KeyDown(KeyCode::Escape)]);
        assert_eq!(signal, Signal::Continue);
        assert_eq!(launcher.playing(), None);
    }

    #[test]
    fn test_click_outside_cells_does_nothing() {
        let mut launcher = Launcher::new(vec![Box::new(CircleGame::new(vec2(0.0, 0.0)))]);
        step(&mut launcher, vec![Event::Click(vec2(2000.0, 100.0))]);
        assert_eq!(launcher.playing(), None);
    }

    #[test]
    fn test_start_by_name_ends_with_the_game() {
        let mut launcher = launcher();
        launcher.start("mouse").unwrap();
        assert_eq!(launcher.playing(), Some("mouse"));

        let (signal, _) = step(&mut launcher, Vec::new());
        assert_eq!(signal, Signal::Continue);
        let (signal, _) = step(&mut launcher, vec![Event::KeyDown(KeyCode::Escape)]);
        assert_eq!(signal, Signal::Completed);
    }

    #[test]
    fn test_start_unknown_name_lists_games() {
        let mut launcher = launcher();
        let err = launcher.start("chess").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config error: no game \"chess\", available: circle, mouse, collecting, counting"
        );
        assert_eq!(launcher.playing(), None);
    }
}
