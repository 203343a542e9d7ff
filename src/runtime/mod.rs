//! Game loop
//!
//! A game is anything with a per-frame `step`. The runner owns the window and
//! the clock, and calls `step` once per frame with a fresh [`Context`]:
//!
//! 1. gather input (queued events, held keys, window size, close request)
//! 2. stop on close
//! 3. step the game; stop if it reports [`Signal::Completed`]
//! 4. wait out the rest of the frame, present it
//!
//! The time the whole iteration took becomes the next frame's `dt`.

mod context;
mod pacing;

pub use context::Context;
pub use pacing::{FpsLimit, FramePacer};

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use macroquad::input::{is_quit_requested, prevent_quit};
use macroquad::math::Vec2;
use macroquad::time::get_time;
use macroquad::window::next_frame;
use crate::config::Settings;
use crate::error::GameError;
use crate::input::{Event, EventPump, Keys};
use crate::screen::{Screen, WindowScreen};

/// What a step reports back to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// This game (or round) is over
    Completed,
}

/// One unit of per-frame behavior
pub trait Game {
    /// Update and draw one frame
    fn step(&mut self, cx: &mut Context) -> Signal;
}

/// Input gathered at the top of a frame
pub struct Input {
    /// Queued key presses and clicks, oldest first
    pub events: Vec<Event>,
    pub keys: Keys,
    /// The window is being closed
    pub quit: bool,
}

/// The part of a loop iteration that needs no window or clock
pub struct Frames {
    /// Screen size seen last frame
    size: Vec2,
}

impl Frames {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// Step `game` once with `input`. Returns `false` once the loop should
    /// stop, either because the window is closing (the game is not stepped)
    /// or because the game completed.
    ///
    /// The window size is polled rather than queued, so a resize is reported
    /// ahead of the frame's queued events.
    pub fn advance<G: Game + ?Sized>(&mut self, game: &mut G, screen: &mut dyn Screen, input: Input, dt: f32) -> bool {
        if input.quit {
            log::info!("Window closed");
            return false;
        }

        let mut events = input.events;
        let size = screen.size();
        if size != self.size {
            self.size = size;
            log::debug!("Resized to {}x{}", size.x, size.y);
            events.insert(0, Event::Resized(size));
        }

        let mut cx = Context::new(screen, events, input.keys, dt);
        if game.step(&mut cx) == Signal::Completed {
            log::info!("Game completed");
            return false;
        }
        true
    }
}

/// Drive `game` until the window closes or the game completes
pub async fn run<G: Game>(mut game: G, limit: FpsLimit) {
    let mut pump = EventPump::new();
    let pacer = FramePacer::new(limit);
    let mut frames = Frames::new(WindowScreen::current().size());
    let mut dt = 0.0f32;

    // Closing the window becomes a request instead of an exit
    prevent_quit();
    log::info!("Frame limit {:?}", limit);

    loop {
        let frame_start = get_time();

        let input = Input {
            events: pump.drain(),
            keys: Keys::poll(),
            quit: is_quit_requested(),
        };
        let mut screen = WindowScreen::current();
        if !frames.advance(&mut game, &mut screen, input, dt) {
            break;
        }

        pacer.wait(frame_start);
        next_frame().await;
        dt = (get_time() - frame_start) as f32;
    }
}

/// Open a window titled `title`, build the game with `make_game` and run it.
///
/// Settings are loaded first; they size the window and pace the loop, and are
/// then handed to `make_game`. Returns once the window has closed.
pub fn launch<G, F, Fut>(title: &str, make_game: F) -> Result<(), GameError>
where
    G: Game + 'static,
    F: FnOnce(Settings) -> Fut + 'static,
    Fut: Future<Output = Result<G, GameError>> + 'static,
{
    let settings = Settings::load()?;
    let conf = settings.window.conf(title);
    let limit = settings.window.fps_limit;

    let outcome: Rc<RefCell<Result<(), GameError>>> = Rc::new(RefCell::new(Ok(())));
    let slot = Rc::clone(&outcome);
    macroquad::Window::from_config(conf, async move {
        let result = match make_game(settings).await {
            Ok(game) => {
                run(game, limit).await;
                Ok(())
            }
            Err(e) => Err(e),
        };
        *slot.borrow_mut() = result;
    });

    outcome.replace(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::input::KeyCode;
    use macroquad::math::vec2;
    use crate::screen::recorder::Recorder;

    /// Answers every step with `signal` and remembers what it was given
    struct Scripted {
        signal: Signal,
        seen: Vec<Vec<Event>>,
    }

    impl Scripted {
        fn new(signal: Signal) -> Self {
            Self { signal, seen: Vec::new() }
        }
    }

    impl Game for Scripted {
        fn step(&mut self, cx: &mut Context) -> Signal {
            self.seen.push(cx.events.clone());
            self.signal
        }
    }

    fn input(events: Vec<Event>, quit: bool) -> Input {
        Input { events, keys: Keys::default(), quit }
    }

    #[test]
    fn test_quit_stops_before_stepping() {
        let mut frames = Frames::new(vec2(1280.0, 720.0));
        let mut game = Scripted::new(Signal::Continue);
        let mut screen = Recorder::new(1280.0, 720.0);

        let events = vec![Event::KeyDown(KeyCode::Space)];
        assert!(!frames.advance(&mut game, &mut screen, input(events, true), 0.016));
        assert!(game.seen.is_empty());
    }

    #[test]
    fn test_completed_stops() {
        let mut frames = Frames::new(vec2(1280.0, 720.0));
        let mut game = Scripted::new(Signal::Completed);
        let mut screen = Recorder::new(1280.0, 720.0);

        assert!(!frames.advance(&mut game, &mut screen, input(Vec::new(), false), 0.016));
        assert_eq!(game.seen.len(), 1);
    }

    #[test]
    fn test_continue_keeps_running() {
        let mut frames = Frames::new(vec2(1280.0, 720.0));
        let mut game = Scripted::new(Signal::Continue);
        let mut screen = Recorder::new(1280.0, 720.0);

        for _ in 0..3 {
            assert!(frames.advance(&mut game, &mut screen, input(Vec::new(), false), 0.016));
        }
        assert_eq!(game.seen, vec![Vec::<Event>::new(); 3]);
    }

    #[test]
    fn test_resize_reported_once_ahead_of_queued_events() {
        let mut frames = Frames::new(vec2(1280.0, 720.0));
        let mut game = Scripted::new(Signal::Continue);
        let mut screen = Recorder::new(800.0, 600.0);

        let events = vec![Event::KeyDown(KeyCode::A), Event::Click(vec2(5.0, 5.0))];
        frames.advance(&mut game, &mut screen, input(events, false), 0.016);
        frames.advance(&mut game, &mut screen, input(vec![Event::KeyDown(KeyCode::B)], false), 0.016);

        assert_eq!(
            game.seen,
            vec![
                vec![
                    Event::Resized(vec2(800.0, 600.0)),
                    Event::KeyDown(KeyCode::A),
                    Event::Click(vec2(5.0, 5.0)),
                ],
                vec![Event::KeyDown(KeyCode::B)],
            ]
        );
    }

    #[test]
    fn test_dt_and_keys_reach_the_game() {
        struct Watcher(Option<(f32, bool)>);
        impl Game for Watcher {
            fn step(&mut self, cx: &mut Context) -> Signal {
                self.0 = Some((cx.dt, cx.keys.is_down(KeyCode::Up)));
                Signal::Continue
            }
        }

        let mut frames = Frames::new(vec2(10.0, 10.0));
        let mut game = Watcher(None);
        let mut screen = Recorder::new(10.0, 10.0);
        let input = Input { events: Vec::new(), keys: Keys::from_iter([KeyCode::Up]), quit: false };
        frames.advance(&mut game, &mut screen, input, 0.25);
        assert_eq!(game.0, Some((0.25, true)));
    }
}
