//! Host-facing game contract
//!
//! The event loop drives a [`Game`] through four calls: `trigger` when the spin
//! key goes down, `update` once per fixed tick, `draw` once per frame and
//! `layout` to learn the logical resolution. All calls are synchronous.

use wheel_core::{RandomSpeed, Segments, SpeedSource, SpinParams, Wheel};
use wheel_render::{layout, Canvas, WheelRenderer};

use crate::config::AppConfig;

/// Operations the host loop invokes
pub trait Game {
    /// The spin input fired
    fn trigger(&mut self);
    /// Advance one fixed tick
    fn update(&mut self);
    /// Render the current state. Must not change game state.
    fn draw(&self, canvas: &mut Canvas);
    /// Logical screen size for a given outer window size
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}

/// The fortune wheel as a [`Game`]
pub struct WheelGame<S = RandomSpeed> {
    wheel: Wheel<S>,
    renderer: WheelRenderer,
    tutorial_text: Option<String>,
    spins: u64,
}

impl WheelGame<RandomSpeed> {
    /// Build from configuration, falling back to defaults for invalid wheel
    /// settings.
    pub fn from_config(config: &AppConfig) -> Self {
        let segments = config.wheel.to_segments().unwrap_or_else(|e| {
            log::warn!("{}. Using default segments.", e);
            Segments::default()
        });
        let params = config.wheel.to_spin_params().unwrap_or_else(|e| {
            log::warn!("{}. Using default spin parameters.", e);
            SpinParams::default()
        });
        let source = match config.wheel.seed {
            Some(seed) => {
                log::info!("Spin speeds seeded with {}", seed);
                RandomSpeed::from_seed(seed)
            }
            None => RandomSpeed::from_entropy(),
        };

        let tutorial = Some(config.ui.tutorial_text.clone()).filter(|t| !t.is_empty());

        Self::new(
            Wheel::new(segments, params, source),
            WheelRenderer::new(config.rendering.to_style()),
            tutorial,
        )
    }
}

impl<S: SpeedSource> WheelGame<S> {
    pub fn new(wheel: Wheel<S>, renderer: WheelRenderer, tutorial_text: Option<String>) -> Self {
        Self {
            wheel,
            renderer,
            tutorial_text,
            spins: 0,
        }
    }

    pub fn wheel(&self) -> &Wheel<S> {
        &self.wheel
    }

    /// Hint shown until the first spin
    pub fn tutorial_text(&self) -> Option<&str> {
        self.tutorial_text.as_deref()
    }

    /// Number of spins triggered so far
    pub fn spin_count(&self) -> u64 {
        self.spins
    }

    fn announce(&self, ticks: u32) {
        if let Some(label) = self.wheel.result_label() {
            log::info!("Spin #{} landed on '{}' after {} ticks", self.spins, label, ticks);
        }
    }
}

impl<S: SpeedSource> Game for WheelGame<S> {
    fn trigger(&mut self) {
        self.tutorial_text = None;
        self.spins += 1;
        let outcome = self.wheel.trigger_spin();
        log::info!(
            "Spin #{} started at {:.3} rad/tick",
            self.spins,
            self.wheel.state().launch_speed()
        );
        if let Some(outcome) = outcome {
            self.announce(outcome.ticks);
        }
    }

    fn update(&mut self) {
        if let Some(outcome) = self.wheel.step() {
            self.announce(outcome.ticks);
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        self.renderer.render(
            canvas,
            self.wheel.state(),
            self.wheel.segments(),
            self.tutorial_text.as_deref(),
        );
    }

    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        layout::logical_size(outside_width, outside_height)
    }
}
