//! Error taxonomy
//!
//! Every failure is terminal. `SetupError` happens before the first tick,
//! `RenderError` is discovered mid-loop. Losing the game is not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while acquiring the window, surface, font or settings
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[source] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[source] winit::error::OsError),
    #[error("failed to create rendering surface: {0}")]
    Surface(#[source] pixels::Error),
    #[error("failed to read font {}: {source}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load font {}: {reason}", .path.display())]
    FontParse { path: PathBuf, reason: String },
    #[error("failed to read settings {}: {source}", .path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings {}: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Per-frame rendering failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot create a text surface for empty text")]
    EmptyText,
    #[error("font has no horizontal line metrics")]
    NoLineMetrics,
    #[error("text surface {width}x{height} exceeds the {max}px limit")]
    TextTooLarge { width: u32, height: u32, max: u32 },
    #[error("failed to present frame: {0}")]
    Present(#[source] pixels::Error),
}

/// Anything that ends the process with a failure status
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
