//! Keyboard tracking
//!
//! Held state per game key, sampled once per frame into a `TickInput`.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Pause,
    Quit,
}

impl GameKey {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(GameKey::LeftUp),
            KeyCode::KeyS => Some(GameKey::LeftDown),
            KeyCode::ArrowUp => Some(GameKey::RightUp),
            KeyCode::ArrowDown => Some(GameKey::RightDown),
            KeyCode::KeyP => Some(GameKey::Pause),
            KeyCode::Escape => Some(GameKey::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: TickInput,
}

impl KeyboardState {
    /// Record a key transition. Returns false for keys the game ignores.
    pub fn handle(&mut self, code: KeyCode, state: ElementState) -> bool {
        let Some(key) = GameKey::from_key_code(code) else {
            return false;
        };
        let down = state.is_pressed();
        match key {
            GameKey::LeftUp => self.held.left_up = down,
            GameKey::LeftDown => self.held.left_down = down,
            GameKey::RightUp => self.held.right_up = down,
            GameKey::RightDown => self.held.right_down = down,
            GameKey::Pause => self.held.pause = down,
            GameKey::Quit => self.held.quit = down,
        }
        true
    }

    /// Release everything (window lost focus, so key-ups will not arrive)
    pub fn clear(&mut self) {
        self.held = TickInput::default();
    }

    pub fn snapshot(&self) -> TickInput {
        self.held
    }
}
