//! Keyboard input handling
//!
//! Movement keys are tracked as a held-key set and paddle intents are
//! derived from set membership each frame. This is self-correcting even if
//! the window loses a key-up event while unfocused.

use std::collections::HashSet;
use winit::keyboard::KeyCode;

#[derive(Debug, Default)]
pub struct HeldKeys {
    pressed: HashSet<KeyCode>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Red paddle: A/D
    pub fn red_dir(&self) -> i8 {
        paddle_dir(self.is_held(KeyCode::KeyA), self.is_held(KeyCode::KeyD))
    }

    /// Blue paddle: left/right arrows
    pub fn blue_dir(&self) -> i8 {
        paddle_dir(
            self.is_held(KeyCode::ArrowLeft),
            self.is_held(KeyCode::ArrowRight),
        )
    }
}

/// Derive a movement direction from the held state of a left/right pair.
/// Both held cancel out.
pub fn paddle_dir(left: bool, right: bool) -> i8 {
    (right as i8) - (left as i8)
}
