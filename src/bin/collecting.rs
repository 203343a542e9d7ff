//! Collecting on a fixed map

use playroom::games::CollectGame;
use playroom::{runtime, GameError};

fn main() -> Result<(), GameError> {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    env_logger::init();
    log::info!("Collecting v{}", playroom::VERSION);

    runtime::launch("Collecting", CollectGame::map)
}
