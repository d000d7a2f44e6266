//! Fixed timestep simulation tick
//!
//! One call = one loop iteration minus rendering and pacing: drain input,
//! run physics unless paused, then check the loss line.

use super::collision::{bounce_off_walls, resolve_paddle_contact};
use super::state::{GameEvent, GameState};
use crate::input::{InputEvent, Key, KeyboardState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Discrete events queued since the previous tick, in arrival order
    pub events: Vec<InputEvent>,
    /// Continuous-press snapshot taken after the events were queued
    pub keys: KeyboardState,
}

impl TickInput {
    /// No events, just the given movement keys held
    pub fn held(left: bool, right: bool) -> Self {
        Self {
            events: Vec::new(),
            keys: KeyboardState { left, right },
        }
    }
}

/// Apply one discrete input event to the session flags
pub fn apply_input_event(state: &mut GameState, event: &InputEvent) -> Option<GameEvent> {
    let session = &mut state.session;
    match event {
        InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
            session.running = false;
            Some(GameEvent::Quit)
        }
        InputEvent::KeyDown(Key::ToggleMode) => {
            session.dark_mode = !session.dark_mode;
            Some(GameEvent::ModeToggled {
                dark_mode: session.dark_mode,
            })
        }
        InputEvent::KeyDown(Key::TogglePause) => {
            session.paused = !session.paused;
            Some(GameEvent::PauseToggled {
                paused: session.paused,
            })
        }
        _ => None,
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events: Vec<GameEvent> = input
        .events
        .iter()
        .filter_map(|event| apply_input_event(state, event))
        .collect();

    if !state.session.paused {
        step_physics(state, &input.keys, &mut events);
    }

    // Independent of pause and of a quit drained this tick; fires once
    if state.ball.rect.y() > state.field.height && !state.session.lost {
        state.session.lost = true;
        state.session.running = false;
        events.push(GameEvent::Lost {
            hits: state.session.hits,
        });
    }

    events
}

fn step_physics(state: &mut GameState, keys: &KeyboardState, events: &mut Vec<GameEvent>) {
    // Left wins when both are held
    if keys.left {
        state.paddle.move_left();
    } else if keys.right {
        state.paddle.move_right(state.field);
    }

    state.ball.advance();

    for wall in bounce_off_walls(&mut state.ball, state.field) {
        events.push(GameEvent::WallBounce { wall });
    }

    if resolve_paddle_contact(&mut state.ball, &state.paddle) {
        state.session.hits += 1;
        events.push(GameEvent::PaddleHit {
            hits: state.session.hits,
        });
    }
}
