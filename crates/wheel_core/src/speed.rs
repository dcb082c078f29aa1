//! Sources for the initial spin speed
//!
//! The wheel never calls an RNG directly; it asks a [`SpeedSource`]. Production
//! code uses [`RandomSpeed`], tests inject [`FixedSpeed`] or a seeded
//! [`RandomSpeed`] to get exact, repeatable outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::SpeedRange;

/// Something that can produce the starting speed of a spin
pub trait SpeedSource {
    /// Draw a speed for a new spin from `range`.
    fn next_speed(&mut self, range: SpeedRange) -> f64;
}

/// Uniform random speed draw backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSpeed<R = StdRng> {
    rng: R,
}

impl RandomSpeed<StdRng> {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible spins
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SpeedSource for RandomSpeed<R> {
    fn next_speed(&mut self, range: SpeedRange) -> f64 {
        self.rng.gen_range(range.min..=range.max)
    }
}

/// Always returns the same speed, ignoring the range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSpeed(pub f64);

impl SpeedSource for FixedSpeed {
    fn next_speed(&mut self, _range: SpeedRange) -> f64 {
        self.0
    }
}

/// Replays a list of speeds in order, repeating the last one
#[derive(Debug, Clone)]
pub struct ScriptedSpeed {
    speeds: Vec<f64>,
    cursor: usize,
}

impl ScriptedSpeed {
    pub fn new(speeds: Vec<f64>) -> Self {
        Self { speeds, cursor: 0 }
    }
}

impl SpeedSource for ScriptedSpeed {
    fn next_speed(&mut self, range: SpeedRange) -> f64 {
        let Some(last) = self.speeds.len().checked_sub(1) else {
            return range.min;
        };
        let speed = self.speeds[self.cursor.min(last)];
        self.cursor += 1;
        speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: SpeedRange = SpeedRange { min: 0.2, max: 1.2 };

    #[test]
    fn test_random_in_range() {
        let mut source = RandomSpeed::from_seed(7);
        for _ in 0..1000 {
            let s = source.next_speed(RANGE);
            assert!((0.2..=1.2).contains(&s), "speed {} out of range", s);
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = RandomSpeed::from_seed(42);
        let mut b = RandomSpeed::from_seed(42);
        for _ in 0..10 {
            assert_eq!(a.next_speed(RANGE), b.next_speed(RANGE));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut source = RandomSpeed::from_seed(1);
        let s = source.next_speed(SpeedRange { min: 0.5, max: 0.5 });
        assert_eq!(s, 0.5);
    }

    #[test]
    fn test_fixed_speed() {
        let mut source = FixedSpeed(0.75);
        assert_eq!(source.next_speed(RANGE), 0.75);
        assert_eq!(source.next_speed(RANGE), 0.75);
    }

    #[test]
    fn test_scripted_speed_repeats_last() {
        let mut source = ScriptedSpeed::new(vec![0.3, 0.9]);
        assert_eq!(source.next_speed(RANGE), 0.3);
        assert_eq!(source.next_speed(RANGE), 0.9);
        assert_eq!(source.next_speed(RANGE), 0.9);
    }

    #[test]
    fn test_scripted_empty_falls_back_to_min() {
        let mut source = ScriptedSpeed::new(Vec::new());
        assert_eq!(source.next_speed(RANGE), 0.2);
    }
}
