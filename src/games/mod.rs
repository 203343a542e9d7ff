//! The games, and the launcher that lists them

pub mod circle;
pub mod collect;
pub mod counting;
pub mod launcher;

pub use circle::CircleGame;
pub use collect::CollectGame;
pub use counting::CountingGame;
pub use launcher::{Entry, Launcher, NAMES};
