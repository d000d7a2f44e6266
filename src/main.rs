//! Single Paddle entry point
//!
//! Parses flags, acquires the window/surface/font, and runs the game loop.
//! Every handle is owned by a local, so all exit paths release them.

use std::process::ExitCode;

use clap::Parser;

use single_paddle::cli::Cli;
use single_paddle::game_loop::{self, Outcome};
use single_paddle::platform::{NativeCanvas, NativePlatform};
use single_paddle::sim::GameState;
use single_paddle::GameError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Exits with status 0 on --help before any setup
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Lost { hits }) => {
            println!("You lost!");
            log::info!("Final hit count: {}", hits);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Quit { hits }) => {
            log::info!("Final hit count: {}", hits);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome, GameError> {
    let settings = cli.resolve_settings()?;
    log::info!("Single Paddle starting...");

    // Declared first so it is dropped last
    let mut platform = NativePlatform::new()?;
    let mut canvas = NativeCanvas::new(&platform, &settings)?;

    let mut state = GameState::new(&settings);
    let outcome = game_loop::run(&mut state, &mut platform, &mut canvas, settings.frame_delay())?;
    Ok(outcome)
}
