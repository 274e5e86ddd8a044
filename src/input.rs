//! Keyboard input mapping
//!
//! The host delivers discrete key-down/key-up events carrying string key
//! identifiers (browser `KeyboardEvent.key` style). This adapter folds them
//! into held-flags that the simulation reads at the start of each tick.
//! Flag writes are last-writer-wins; repeated key-down events for a held key
//! are harmless.

use serde::{Deserialize, Serialize};

/// Held-key flags read (not cleared) by the simulation each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
}

impl InputState {
    /// Apply a key-down event. Unrelated keys are ignored.
    pub fn key_down(&mut self, key: &str) {
        match key {
            "ArrowLeft" | "a" | "A" => self.left_held = true,
            "ArrowRight" | "d" | "D" => self.right_held = true,
            _ => {}
        }
    }

    /// Apply a key-up event. Unrelated keys are ignored.
    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowLeft" | "a" | "A" => self.left_held = false,
            "ArrowRight" | "d" | "D" => self.right_held = false,
            _ => {}
        }
    }

    /// Release everything (used on reset).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
