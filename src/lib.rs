//! PLAYROOM: small 2D learning games
//!
//! A moving circle, a mouse that eats cheese, and a counting game, all sharing
//! one frame loop, plus a launcher that lists them. Each game implements
//! [`runtime::Game`]: one `step` per frame, given the screen, the input since
//! last frame and the frame time.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod games;
pub mod geometry;
pub mod input;
pub mod runtime;
pub mod screen;
pub mod texture;

pub use error::GameError;
