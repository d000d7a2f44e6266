//! Backend-neutral input events
//!
//! Platforms translate their native events into `InputEvent`s and keep a
//! `KeyboardState` of the continuous-press keys.

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Light/dark display toggle
    ToggleMode,
    TogglePause,
    /// Same as closing the window
    Escape,
    Other,
}

/// A discrete input event drained once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close (or equivalent)
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Held state of the movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pub left: bool,
    pub right: bool,
}

impl KeyboardState {
    /// Track press/release of the movement keys
    pub fn apply(&mut self, event: &InputEvent) {
        let (key, held) = match *event {
            InputEvent::KeyDown(key) => (key, true),
            InputEvent::KeyUp(key) => (key, false),
            InputEvent::Quit => return,
        };
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            _ => {}
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

/// Key bindings as shown by `--help`
pub const KEY_BINDINGS: &str = "\
Commands:
  \u{2190} / \u{2192}     Move the paddle
  M         Change between light/dark mode
  P         Pause/resume game
  ESC       Leave the game";
