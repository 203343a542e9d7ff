//! Mouse and cheese: eat everything, then play again

use playroom::games::CollectGame;
use playroom::{runtime, GameError};

fn main() -> Result<(), GameError> {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    env_logger::init();
    log::info!("Mouse v{}", playroom::VERSION);

    runtime::launch("Mouse", CollectGame::mouse)
}
