//! Keyboard, mouse and window input
//!
//! Two views of the input reach a game each frame:
//! - the ordered **events** since the last frame (key presses, clicks, resize)
//! - the **held keys** snapshot, for continuous movement

mod actions;
mod events;
mod state;

pub use actions::*;
pub use events::{Event, EventPump};
pub use state::{steer, Keys};
