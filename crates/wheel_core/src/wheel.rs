//! The wheel state machine
//!
//! Two phases: `Idle` and `Spinning`. A trigger always (re)starts a spin from
//! angle 0; each tick advances the angle and decays the speed geometrically
//! until it falls under the stop threshold, at which point the result is
//! resolved in the same tick.

use crate::params::SpinParams;
use crate::segments::Segments;
use crate::speed::{RandomSpeed, SpeedSource};
use crate::state::{WheelPhase, WheelState};

/// A finished spin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    /// Winning segment index
    pub index: usize,
    /// Ticks the spin lasted
    pub ticks: u32,
}

/// Wheel simulation: state, segments, tuning and the speed source
pub struct Wheel<S = RandomSpeed> {
    state: WheelState,
    segments: Segments,
    params: SpinParams,
    source: S,
    spin_ticks: u32,
}

impl<S: SpeedSource> Wheel<S> {
    /// Create an idle wheel with no result
    pub fn new(segments: Segments, params: SpinParams, source: S) -> Self {
        Self {
            state: WheelState::default(),
            segments,
            params,
            source,
            spin_ticks: 0,
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn params(&self) -> &SpinParams {
        &self.params
    }

    /// Label of the last resolved spin
    pub fn result_label(&self) -> Option<&str> {
        self.state.result.and_then(|i| self.segments.label(i))
    }

    /// Start a new spin, interrupting any spin in progress.
    ///
    /// Returns an outcome only when the drawn speed is already below the stop
    /// threshold, in which case the wheel resolves on the spot at angle 0.
    pub fn trigger_spin(&mut self) -> Option<SpinOutcome> {
        let speed = self.source.next_speed(self.params.speed_range).max(0.0);

        self.state.angle = 0.0;
        self.state.speed = speed;
        self.state.launch_speed = speed;
        self.state.phase = WheelPhase::Spinning;
        self.state.result = None;
        self.spin_ticks = 0;

        log::debug!("Spin started at {:.4} rad/tick", speed);

        if speed < self.params.stop_threshold {
            return Some(self.resolve());
        }
        None
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the outcome on the tick the wheel comes to rest.
    pub fn step(&mut self) -> Option<SpinOutcome> {
        if self.state.phase != WheelPhase::Spinning {
            return None;
        }

        self.state.angle += self.state.speed;
        self.state.speed *= self.params.decay;
        self.spin_ticks += 1;

        if self.state.speed < self.params.stop_threshold {
            return Some(self.resolve());
        }
        None
    }

    /// Run ticks until the wheel stops. Returns `None` if it was idle.
    pub fn run_to_rest(&mut self) -> Option<SpinOutcome> {
        while self.state.is_spinning() {
            if let Some(outcome) = self.step() {
                return Some(outcome);
            }
        }
        None
    }

    fn resolve(&mut self) -> SpinOutcome {
        self.state.speed = 0.0;
        self.state.phase = WheelPhase::Idle;

        let index = self.segments.index_at(self.state.angle);
        self.state.result = Some(index);

        log::debug!(
            "Spin resolved to segment {} after {} ticks (angle {:.4})",
            index,
            self.spin_ticks,
            self.state.angle
        );

        SpinOutcome {
            index,
            ticks: self.spin_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speed::{FixedSpeed, ScriptedSpeed};

    fn fixed_wheel(speed: f64) -> Wheel<FixedSpeed> {
        Wheel::new(Segments::default(), SpinParams::default(), FixedSpeed(speed))
    }

    #[test]
    fn test_new_wheel_is_idle() {
        let wheel = fixed_wheel(0.5);
        assert_eq!(wheel.state().phase(), WheelPhase::Idle);
        assert!(!wheel.state().has_result());
        assert_eq!(wheel.result_label(), None);
    }

    #[test]
    fn test_step_when_idle_is_noop() {
        let mut wheel = fixed_wheel(0.5);
        let before = wheel.state().clone();
        assert_eq!(wheel.step(), None);
        assert_eq!(wheel.state(), &before);
    }

    #[test]
    fn test_trigger_starts_spin() {
        let mut wheel = fixed_wheel(0.5);
        assert_eq!(wheel.trigger_spin(), None);
        assert!(wheel.state().is_spinning());
        assert_eq!(wheel.state().speed(), 0.5);
        assert_eq!(wheel.state().angle(), 0.0);
        assert!(!wheel.state().has_result());
    }

    #[test]
    fn test_single_step() {
        let mut wheel = fixed_wheel(0.5);
        wheel.trigger_spin();
        wheel.step();
        assert_eq!(wheel.state().angle(), 0.5);
        assert!((wheel.state().speed() - 0.49).abs() < 1e-12);
    }

    #[test]
    fn test_spin_resolves() {
        let mut wheel = fixed_wheel(0.8);
        wheel.trigger_spin();
        let outcome = wheel.run_to_rest().expect("spin should finish");
        assert!(!wheel.state().is_spinning());
        assert_eq!(wheel.state().speed(), 0.0);
        assert_eq!(wheel.state().result(), Some(outcome.index));
        assert!(outcome.index < wheel.segments().len());
        assert!(wheel.result_label().is_some());
    }

    #[test]
    fn test_retrigger_while_spinning_resets() {
        let mut wheel = Wheel::new(
            Segments::default(),
            SpinParams::default(),
            ScriptedSpeed::new(vec![1.0, 0.4]),
        );
        wheel.trigger_spin();
        for _ in 0..10 {
            wheel.step();
        }
        assert!(wheel.state().angle() > 0.0);

        wheel.trigger_spin();
        assert_eq!(wheel.state().angle(), 0.0);
        assert_eq!(wheel.state().speed(), 0.4);
        assert!(wheel.state().is_spinning());
        assert!(!wheel.state().has_result());
    }

    #[test]
    fn test_retrigger_clears_previous_result() {
        let mut wheel = fixed_wheel(0.3);
        wheel.trigger_spin();
        wheel.run_to_rest();
        assert!(wheel.state().has_result());

        wheel.trigger_spin();
        assert!(!wheel.state().has_result());
    }

    #[test]
    fn test_speed_below_threshold_resolves_immediately() {
        let mut wheel = fixed_wheel(0.0005);
        let outcome = wheel.trigger_spin();
        assert_eq!(outcome, Some(SpinOutcome { index: 0, ticks: 0 }));
        assert_eq!(wheel.state().phase(), WheelPhase::Idle);
        assert_eq!(wheel.state().angle(), 0.0);
        assert_eq!(wheel.state().result(), Some(0));
        assert_eq!(wheel.result_label(), Some("Socken"));
        assert_eq!(wheel.state().speed(), 0.0);
        assert_eq!(wheel.state().launch_speed(), 0.0005);
    }

    #[test]
    fn test_negative_speed_clamped() {
        let mut wheel = fixed_wheel(-3.0);
        wheel.trigger_spin();
        assert_eq!(wheel.state().speed(), 0.0);
        assert_eq!(wheel.state().result(), Some(0));
    }

    #[test]
    fn test_run_to_rest_when_idle() {
        let mut wheel = fixed_wheel(0.5);
        assert_eq!(wheel.run_to_rest(), None);
    }
}
