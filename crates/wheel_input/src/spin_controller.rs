//! Edge-triggered spin key handling
//!
//! Controls:
//! - Space: spin the wheel (once per press; holding or OS key repeat does nothing)

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Turns raw key events into one-shot spin requests
pub struct SpinController {
    spin_key: KeyCode,
    held: bool,
    spin_pending: bool,
    presses: u64,
}

impl Default for SpinController {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinController {
    pub fn new() -> Self {
        Self::with_key(KeyCode::Space)
    }

    /// Controller bound to a different key
    pub fn with_key(spin_key: KeyCode) -> Self {
        Self {
            spin_key,
            held: false,
            spin_pending: false,
            presses: 0,
        }
    }

    pub fn spin_key(&self) -> KeyCode {
        self.spin_key
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is the spin key. A spin is queued only on the
    /// released-to-pressed transition.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if key != self.spin_key {
            return false;
        }

        match state {
            ElementState::Pressed => {
                if !self.held {
                    self.held = true;
                    self.spin_pending = true;
                    self.presses += 1;
                }
            }
            ElementState::Released => {
                self.held = false;
            }
        }
        true
    }

    /// Drop key state when the window loses focus, so a release we never saw
    /// does not swallow the next press.
    pub fn reset(&mut self) {
        self.held = false;
    }

    /// Take the pending spin request, if any
    pub fn consume_spin(&mut self) -> bool {
        std::mem::take(&mut self.spin_pending)
    }

    /// Whether the spin key is currently down
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Number of accepted presses since startup
    pub fn press_count(&self) -> u64 {
        self.presses
    }
}
