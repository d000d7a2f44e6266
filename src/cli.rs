//! Command line
//!
//! `--help` prints usage plus the key bindings and exits before any window
//! is created.

use std::path::PathBuf;

use clap::Parser;

use crate::error::SetupError;
use crate::input::KEY_BINDINGS;
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "single-paddle",
    version,
    about = "How to play: keep the ball off the floor with a single paddle",
    after_help = KEY_BINDINGS
)]
pub struct Cli {
    /// HUD font (TTF/OTF)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// JSON settings file; missing fields keep their defaults
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,
}

impl Cli {
    /// Defaults, then the settings file, then flags
    pub fn resolve_settings(&self) -> Result<Settings, SetupError> {
        let mut settings = match &self.settings {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if let Some(font) = &self.font {
            settings.font_path = font.clone();
        }
        if self.light {
            settings.dark_mode = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}
