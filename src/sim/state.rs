//! Game state and core simulation types
//!
//! Everything the loop mutates lives in `GameState`; it is created once from
//! `Settings` and passed by exclusive reference to every tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::Settings;

/// Playable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

/// Which wall a ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Notifications produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Quit requested (window close or Escape)
    Quit,
    PauseToggled { paused: bool },
    ModeToggled { dark_mode: bool },
    WallBounce { wall: Wall },
    /// Ball struck the paddle; carries the new hit count
    PaddleHit { hits: u32 },
    /// Ball fell past the bottom edge
    Lost { hits: u32 },
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal pixels per tick
    pub speed: i32,
}

impl Paddle {
    /// Centered horizontally, `margin` pixels above the bottom edge
    pub fn new(field: Field, width: i32, height: i32, margin: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(
                field.width / 2 - width / 2,
                field.height - height - margin,
                width,
                height,
            ),
            speed,
        }
    }

    /// Shift left by `speed`, stopping at the left wall
    pub fn move_left(&mut self) {
        self.rect.pos.x = self.rect.pos.x.saturating_sub(self.speed).max(0);
    }

    /// Shift right by `speed`, stopping at the right wall
    pub fn move_right(&mut self, field: Field) {
        let max_x = (field.width - self.rect.width()).max(0);
        self.rect.pos.x = self.rect.pos.x.saturating_add(self.speed).min(max_x);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: IVec2,
    /// Canonical per-axis speed (magnitude of `vel` components at launch)
    pub speed: i32,
}

impl Ball {
    /// Centered in the field, moving up and to the right
    pub fn new(field: Field, size: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(
                field.width / 2 - size / 2,
                field.height / 2 - size / 2,
                size,
                size,
            ),
            vel: IVec2::new(speed, -speed),
            speed,
        }
    }

    /// Advance one tick
    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }
}

/// Session flags and counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Cleared on quit or loss; the loop stops at the next iteration
    pub running: bool,
    pub paused: bool,
    pub dark_mode: bool,
    /// Paddle hits this run (never reset)
    pub hits: u32,
    /// Set once when the ball falls past the bottom edge
    pub lost: bool,
}

impl Session {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            running: true,
            paused: false,
            dark_mode,
            hits: 0,
            lost: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub paddle: Paddle,
    pub ball: Ball,
    pub session: Session,
}

impl GameState {
    /// Initial state for a run. Expects validated settings.
    pub fn new(settings: &Settings) -> Self {
        let field = Field {
            width: px(settings.window_width),
            height: px(settings.window_height),
        };
        Self {
            field,
            paddle: Paddle::new(
                field,
                px(settings.paddle_width),
                px(settings.paddle_height),
                px(settings.paddle_margin),
                px(settings.paddle_speed),
            ),
            ball: Ball::new(field, px(settings.ball_size), px(settings.ball_speed)),
            session: Session::new(settings.dark_mode),
        }
    }
}

/// Settings are unsigned; sim coordinates are `i32`
fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
