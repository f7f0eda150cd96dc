//! Keyboard state tracking
//!
//! Held keys drive paddle movement; presses are latched until a simulation
//! tick consumes them so a short tap between ticks is never lost.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::sim::TickInput;

pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
pub const LAUNCH_KEY: KeyCode = KeyCode::Space;
pub const RESTART_KEY: KeyCode = KeyCode::KeyR;
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

#[derive(Debug, Default)]
pub struct Keyboard {
    /// Currently held keys
    held: HashSet<KeyCode>,
    /// Keys pressed since the last consumed tick
    pressed: HashSet<KeyCode>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition; OS auto-repeat does not count as a new press
    pub fn key_event(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if pressed {
            if !repeat {
                self.pressed.insert(key);
            }
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.held.contains(k))
    }

    /// Input for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.any_held(&LEFT_KEYS),
            right: self.any_held(&RIGHT_KEYS),
            launch: self.pressed.contains(&LAUNCH_KEY),
            restart: self.pressed.contains(&RESTART_KEY),
        }
    }

    /// Drop latched presses once a tick has seen them
    pub fn consume_presses(&mut self) {
        self.pressed.clear();
    }

    /// Forget everything (window lost focus, releases will not arrive)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}
