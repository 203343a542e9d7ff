//! Sprites and their scaled copies
//!
//! - **Image**: a bitmap plus a one-slot cache of its most recently requested
//!   scaled copy
//! - **Picture**: the concrete bitmap, decoded from PNG and uploaded to the GPU
//!   when scaled

mod cache;
mod picture;

pub use cache::{Bitmap, Image};
pub use picture::Picture;
