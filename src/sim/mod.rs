//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick deltas only (no wall-clock time)
//! - Integer positions
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_walls, resolve_paddle_contact};
pub use rect::Rect;
pub use state::{Ball, Field, GameEvent, GameState, Paddle, Session, Wall};
pub use tick::{TickInput, apply_input_event, tick};
