//! Moving circle demo

use macroquad::math::vec2;
use macroquad::window::{screen_height, screen_width};
use playroom::games::CircleGame;
use playroom::{runtime, GameError};

fn main() -> Result<(), GameError> {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    env_logger::init();
    log::info!("Circle v{}", playroom::VERSION);

    runtime::launch("Circle", |_settings| async {
        Ok::<_, GameError>(CircleGame::new(vec2(screen_width(), screen_height()) / 2.0))
    })
}
