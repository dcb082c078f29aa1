//! Fortune Wheel Rendering Library
//!
//! The wheel is rasterized on the CPU into a fixed 320x240 [`Canvas`], then
//! uploaded and scaled onto the window surface with wgpu.
//!
//! ## Key Components
//!
//! - [`canvas::Canvas`] - RGBA frame buffer at logical resolution
//! - [`primitives`] - Bresenham lines, spokes and polygonal circles
//! - [`font`] - 8x8 bitmap text with Latin-1 coverage
//! - [`wheel_renderer::WheelRenderer`] - Draws a `WheelState` into a canvas
//! - [`layout`] - Logical size and letterbox viewport
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::BlitPipeline`] - Texture upload and scaled present

pub mod canvas;
pub mod context;
pub mod font;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod wheel_renderer;

pub use canvas::{Canvas, Rgba8};
pub use layout::{fit_viewport, logical_size, Viewport, LOGICAL_HEIGHT, LOGICAL_WIDTH};
pub use wheel_renderer::{WheelRenderer, WheelStyle};

// Re-export core types for convenience
pub use wheel_core::{Segments, WheelState};
