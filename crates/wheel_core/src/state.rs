//! Observable wheel state

use crate::angle;

/// Whether the wheel is turning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelPhase {
    /// At rest, waiting for a spin
    #[default]
    Idle,
    /// Decelerating toward a stop
    Spinning,
}

/// Snapshot of everything the renderer needs
///
/// Fields are read-only outside this crate; only [`crate::Wheel`] mutates them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelState {
    pub(crate) angle: f64,
    pub(crate) speed: f64,
    pub(crate) launch_speed: f64,
    pub(crate) phase: WheelPhase,
    pub(crate) result: Option<usize>,
}

impl WheelState {
    /// Raw, unbounded pointer angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Pointer angle normalized into `[0, 2π)`
    pub fn normalized_angle(&self) -> f64 {
        angle::normalize_angle(self.angle)
    }

    /// Pointer angle in degrees with 0° pointing up
    pub fn display_degrees(&self) -> f64 {
        angle::display_degrees(self.angle)
    }

    /// Current angular speed in radians per tick
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Speed drawn when the current or last spin was triggered
    pub fn launch_speed(&self) -> f64 {
        self.launch_speed
    }

    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == WheelPhase::Spinning
    }

    /// Winning segment of the last completed spin
    pub fn result(&self) -> Option<usize> {
        self.result
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}
