//! GPU presentation of the logical frame
//!
//! The wheel is rasterized on the CPU; this module only uploads the finished
//! frame and scales it onto the surface.

pub mod blit_pipeline;

pub use blit_pipeline::{frame_format_for, BlitPipeline, UploadError};
