//! Fixed-tick simulation system
//!
//! Manages the game loop simulation including:
//! - Delta time calculation
//! - Fixed-step accumulation (ticks per second from config)
//! - Spin input → game trigger
//! - Game stepping

use std::time::Instant;
use wheel_input::SpinController;

use crate::config::SimulationConfig;
use crate::game::Game;

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Ticks run this frame
    pub ticks: u32,
    /// Whether a spin was triggered this frame
    pub spin_triggered: bool,
}

/// Runs the game at a fixed tick rate regardless of frame rate
pub struct SimulationSystem {
    last_frame: Instant,
    accumulator: f64,
    tick_seconds: f64,
    max_frame_time: f64,
    max_ticks_per_frame: u32,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            last_frame: Instant::now(),
            accumulator: 0.0,
            tick_seconds: 1.0 / config.tick_rate.max(1) as f64,
            max_frame_time: config.max_frame_time.max(0.0) as f64,
            max_ticks_per_frame: config.max_ticks_per_frame.max(1),
        }
    }

    /// Seconds per tick
    pub fn tick_seconds(&self) -> f64 {
        self.tick_seconds
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update<G: Game>(
        &mut self,
        game: &mut G,
        controller: &mut SpinController,
    ) -> SimulationResult {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.advance(dt, game, controller)
    }

    /// Run as many fixed ticks as `dt` seconds allow.
    ///
    /// A pending spin is applied at the start of the first tick; if no tick
    /// runs this frame it stays queued for the next one.
    pub fn advance<G: Game>(
        &mut self,
        dt: f64,
        game: &mut G,
        controller: &mut SpinController,
    ) -> SimulationResult {
        // Cap dt so a long stall (first frame, window drag) doesn't fast-forward
        self.accumulator += dt.clamp(0.0, self.max_frame_time);

        let mut result = SimulationResult {
            ticks: 0,
            spin_triggered: false,
        };

        while self.accumulator >= self.tick_seconds {
            if result.ticks == self.max_ticks_per_frame {
                log::debug!(
                    "Dropping {:.1} ticks of backlog",
                    self.accumulator / self.tick_seconds
                );
                self.accumulator = 0.0;
                break;
            }
            self.accumulator -= self.tick_seconds;

            if controller.consume_spin() {
                game.trigger();
                result.spin_triggered = true;
            }
            game.update();
            result.ticks += 1;
        }

        result
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}
