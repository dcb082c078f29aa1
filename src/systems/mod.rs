//! Application systems
//!
//! Window, simulation and rendering, each owned by the app and driven from the
//! winit event loop.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
pub use window::{WindowError, WindowSystem};
