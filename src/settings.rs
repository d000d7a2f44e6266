//! Game settings
//!
//! Defaults mirror `consts`. A JSON file can override any subset of fields;
//! command-line flags are layered on top by `cli`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;

/// Largest window edge we accept (keeps all sim math comfortably in `i32`)
pub const MAX_WINDOW_EDGE: u32 = 16_384;

/// Largest HUD font size in pixels
pub const MAX_FONT_SIZE: f32 = 256.0;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    // === Paddle ===
    pub paddle_width: u32,
    pub paddle_height: u32,
    /// Distance from the bottom edge of the window
    pub paddle_margin: u32,
    /// Pixels per tick while a direction key is held
    pub paddle_speed: u32,

    // === Ball ===
    pub ball_size: u32,
    /// Pixels per tick on each axis
    pub ball_speed: u32,

    // === HUD ===
    pub font_path: PathBuf,
    pub font_size: f32,

    // === Pacing / display ===
    /// Fixed sleep at the end of every tick
    pub frame_delay_ms: u64,
    /// Start in dark mode
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            font_path: PathBuf::from(FONT_PATH),
            font_size: FONT_SIZE,

            frame_delay_ms: FRAME_DELAY_MS,
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SetupError> {
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SetupError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject geometry the simulation cannot honor
    pub fn validate(&self) -> Result<(), SetupError> {
        let invalid = |msg: String| -> Result<(), SetupError> {
            Err(SetupError::InvalidSettings(msg))
        };

        if self.window_width == 0 || self.window_height == 0 {
            return invalid("window dimensions must be non-zero".into());
        }
        if self.window_width > MAX_WINDOW_EDGE || self.window_height > MAX_WINDOW_EDGE {
            return invalid(format!("window edges must be at most {MAX_WINDOW_EDGE}px"));
        }
        if self.paddle_width == 0 || self.paddle_height == 0 || self.ball_size == 0 {
            return invalid("paddle and ball sizes must be non-zero".into());
        }
        if self.paddle_width > self.window_width {
            return invalid(format!(
                "paddle width {} exceeds window width {}",
                self.paddle_width, self.window_width
            ));
        }
        if self.ball_size >= self.window_width || self.ball_size >= self.window_height {
            return invalid(format!("ball size {} does not fit the window", self.ball_size));
        }
        match self.paddle_height.checked_add(self.paddle_margin) {
            Some(span) if span <= self.window_height => {}
            _ => return invalid("paddle does not fit above the bottom margin".into()),
        }
        if self.paddle_speed == 0 || self.ball_speed == 0 {
            return invalid("paddle and ball speeds must be non-zero".into());
        }
        if self.paddle_speed > self.window_width {
            return invalid(format!(
                "paddle speed {} exceeds window width {}",
                self.paddle_speed, self.window_width
            ));
        }
        // A ball faster than its own size can skip over walls and the paddle
        if self.ball_speed > self.ball_size || self.ball_speed > self.paddle_height {
            return invalid(format!(
                "ball speed {} must not exceed the ball size or paddle height",
                self.ball_speed
            ));
        }
        if !(self.font_size > 0.0 && self.font_size <= MAX_FONT_SIZE) {
            return invalid(format!(
                "font size {} must be in (0, {MAX_FONT_SIZE}]",
                self.font_size
            ));
        }
        Ok(())
    }

    /// End-of-tick sleep
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}
