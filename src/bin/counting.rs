//! Counting: type a number, see that many apples

use playroom::games::CountingGame;
use playroom::{runtime, GameError};

fn main() -> Result<(), GameError> {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    env_logger::init();
    log::info!("Counting v{}", playroom::VERSION);

    runtime::launch("Counting", CountingGame::load)
}
