//! Single Paddle - a one-paddle Pong in a fixed window
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, collisions, session flags)
//! - `renderer`: Frame composition over a backend-agnostic canvas
//! - `platform`: Window/input backend (winit + pixels)
//! - `game_loop`: Fixed-cadence driver tying input, sim and rendering together
//! - `settings`: Runtime tunables, defaulting to `consts`

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, RenderError, SetupError};
pub use game_loop::Outcome;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Pong (but with one paddle)";

    /// Paddle defaults - sits near the bottom edge, moves horizontally only
    pub const PADDLE_WIDTH: u32 = 100;
    pub const PADDLE_HEIGHT: u32 = 20;
    /// Gap between the paddle's bottom edge and the window's bottom edge
    pub const PADDLE_MARGIN: u32 = 10;
    /// Horizontal paddle movement per tick while a direction key is held
    pub const PADDLE_SPEED: u32 = 10;

    /// Ball defaults (square)
    pub const BALL_SIZE: u32 = 20;
    /// Per-axis speed; also the canonical upward speed after a paddle hit
    pub const BALL_SPEED: u32 = 5;

    /// HUD font
    pub const FONT_PATH: &str = "OpenSans-Bold.ttf";
    pub const FONT_SIZE: f32 = 24.0;

    /// Coarse end-of-tick sleep (~60 FPS)
    pub const FRAME_DELAY_MS: u64 = 16;
}
