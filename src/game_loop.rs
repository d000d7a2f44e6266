//! Fixed-cadence game loop
//!
//! Each iteration drains input, ticks the simulation, renders, then sleeps
//! for a fixed delay. The sleep is coarse: no catch-up for missed frames.

use std::time::Duration;

use crate::error::GameError;
use crate::platform::Platform;
use crate::renderer::{Canvas, draw_frame};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// How a run ended (both are successful exits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Window closed or Escape pressed
    Quit { hits: u32 },
    /// Ball fell past the paddle
    Lost { hits: u32 },
}

/// Run until quit, loss, or a fatal rendering error
///
/// The frame of the final tick is still drawn before returning.
pub fn run<P, C>(
    state: &mut GameState,
    platform: &mut P,
    canvas: &mut C,
    frame_delay: Duration,
) -> Result<Outcome, GameError>
where
    P: Platform + ?Sized,
    C: Canvas + ?Sized,
{
    log::info!("Game loop started ({}ms per frame)", frame_delay.as_millis());

    let mut input = TickInput::default();
    let mut ticks: u64 = 0;

    while state.session.running {
        input.events.clear();
        platform.poll_events(&mut input.events);
        input.keys = platform.keyboard();

        for event in tick(state, &input) {
            log_event(&event);
        }

        if let Err(err) = draw_frame(canvas, state) {
            log::error!("Rendering failed after {} ticks: {}", ticks, err);
            return Err(err.into());
        }

        platform.sleep(frame_delay);
        ticks += 1;
    }

    let hits = state.session.hits;
    log::info!("Game loop stopped after {} ticks with {} hits", ticks, hits);
    Ok(if state.session.lost {
        Outcome::Lost { hits }
    } else {
        Outcome::Quit { hits }
    })
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Quit => log::info!("Quit requested"),
        GameEvent::PauseToggled { paused } => {
            log::info!("{}", if *paused { "Paused" } else { "Resumed" })
        }
        GameEvent::ModeToggled { dark_mode } => {
            log::info!("Display mode: {}", if *dark_mode { "dark" } else { "light" })
        }
        GameEvent::WallBounce { wall } => log::debug!("Wall bounce: {:?}", wall),
        GameEvent::PaddleHit { hits } => log::debug!("Paddle hit #{}", hits),
        GameEvent::Lost { hits } => log::info!("Ball lost after {} hits", hits),
    }
}
