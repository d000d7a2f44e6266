//! Platform abstraction layer
//!
//! Handles native differences for:
//! - Input events (non-blocking drain)
//! - Continuous key state
//! - Frame pacing

pub mod native;

pub use native::{NativeCanvas, NativePlatform};

use std::time::Duration;

use crate::input::{InputEvent, KeyboardState};

/// Source of input and time for the game loop
pub trait Platform {
    /// Append every input event queued since the last call. Never blocks.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);

    /// Movement keys currently held
    fn keyboard(&self) -> KeyboardState;

    /// End-of-tick delay
    fn sleep(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
