//! Fortune Wheel Core
//!
//! Simulation types for the fortune wheel: a pointer spun at a random speed
//! that decays geometrically until it stops on one of several equal sectors.
//!
//! ## Core Types
//!
//! - [`Wheel`] - The state machine: trigger a spin, advance one tick
//! - [`WheelState`] - Read-only snapshot for rendering
//! - [`Segments`] - Ordered sector labels
//! - [`SpinParams`] - Decay, stop threshold and initial speed range
//! - [`SpeedSource`] - Seedable source of initial speeds

pub mod angle;
mod params;
mod segments;
mod speed;
mod state;
mod wheel;

pub use params::{
    SpeedRange, SpinParams, WheelError, DEFAULT_DECAY, DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED,
    DEFAULT_STOP_THRESHOLD, MAX_SPIN_SPEED,
};
pub use segments::{Segments, DEFAULT_LABELS};
pub use speed::{FixedSpeed, RandomSpeed, ScriptedSpeed, SpeedSource};
pub use state::{WheelPhase, WheelState};
pub use wheel::{SpinOutcome, Wheel};
