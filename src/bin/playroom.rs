//! All the games in one window: pick one from the grid, or name it

use clap::builder::PossibleValuesParser;
use clap::Parser;
use playroom::games::{Launcher, NAMES};
use playroom::{runtime, GameError};

#[derive(Parser, Debug)]
#[command(version, about = "Small 2D learning games")]
struct Args {
    /// Play this game right away instead of showing the grid
    #[arg(value_parser = PossibleValuesParser::new(NAMES))]
    game: Option<String>,
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();

    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    env_logger::init();
    log::info!("Playroom v{}", playroom::VERSION);

    runtime::launch("Playroom", move |settings| async move {
        let mut launcher = Launcher::load(settings).await?;
        if let Some(name) = &args.game {
            launcher.start(name)?;
        }
        Ok::<_, GameError>(launcher)
    })
}
