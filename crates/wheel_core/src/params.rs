//! Spin tuning parameters and their validation

use std::fmt;

/// Default per-tick decay factor
pub const DEFAULT_DECAY: f64 = 0.98;
/// Default speed below which the wheel counts as stopped
pub const DEFAULT_STOP_THRESHOLD: f64 = 0.001;
/// Default lower bound of the initial speed draw (radians per tick)
pub const DEFAULT_MIN_SPEED: f64 = 0.2;
/// Default upper bound of the initial speed draw (radians per tick)
pub const DEFAULT_MAX_SPEED: f64 = 1.2;
/// Largest accepted initial speed: one full turn per tick
pub const MAX_SPIN_SPEED: f64 = std::f64::consts::TAU;

/// Error type for invalid wheel setup
#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    /// The wheel needs at least one segment
    EmptySegments,
    /// Decay must lie strictly between 0 and 1
    InvalidDecay(f64),
    /// Stop threshold must be positive
    InvalidStopThreshold(f64),
    /// Speed range must be ordered and within `[0, MAX_SPIN_SPEED]`
    InvalidSpeedRange { min: f64, max: f64 },
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::EmptySegments => write!(f, "Wheel has no segments"),
            WheelError::InvalidDecay(d) => write!(f, "Decay {} is outside (0, 1)", d),
            WheelError::InvalidStopThreshold(t) => {
                write!(f, "Stop threshold {} must be positive", t)
            }
            WheelError::InvalidSpeedRange { min, max } => {
                write!(f, "Invalid speed range [{}, {}]", min, max)
            }
        }
    }
}

impl std::error::Error for WheelError {}

/// Inclusive range the initial spin speed is drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

/// Physics parameters for a spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinParams {
    /// Multiplicative speed factor applied each tick
    pub decay: f64,
    /// Speed below which the spin ends
    pub stop_threshold: f64,
    /// Initial speed range
    pub speed_range: SpeedRange,
}

impl SpinParams {
    /// Create validated parameters
    pub fn new(
        decay: f64,
        stop_threshold: f64,
        min_speed: f64,
        max_speed: f64,
    ) -> Result<Self, WheelError> {
        // Negated comparisons so NaN is rejected too
        if !(decay > 0.0 && decay < 1.0) {
            return Err(WheelError::InvalidDecay(decay));
        }
        if !(stop_threshold > 0.0) || !stop_threshold.is_finite() {
            return Err(WheelError::InvalidStopThreshold(stop_threshold));
        }
        if !(min_speed >= 0.0 && min_speed <= max_speed && max_speed <= MAX_SPIN_SPEED) {
            return Err(WheelError::InvalidSpeedRange {
                min: min_speed,
                max: max_speed,
            });
        }
        Ok(Self {
            decay,
            stop_threshold,
            speed_range: SpeedRange {
                min: min_speed,
                max: max_speed,
            },
        })
    }
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            decay: DEFAULT_DECAY,
            stop_threshold: DEFAULT_STOP_THRESHOLD,
            speed_range: SpeedRange {
                min: DEFAULT_MIN_SPEED,
                max: DEFAULT_MAX_SPEED,
            },
        }
    }
}
