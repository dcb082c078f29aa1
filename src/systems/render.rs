//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The CPU frame canvas and blit pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use wheel_render::{
    context::{ContextError, RenderContext},
    fit_viewport,
    pipeline::{BlitPipeline, UploadError},
    Canvas, Rgba8,
};

use crate::config::RenderingConfig;
use crate::game::Game;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU bring-up failed
    Context(ContextError),
    /// Surface was lost or outdated and has been reconfigured
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Canvas does not fit the frame texture
    Upload(UploadError),
    /// Other surface error
    Other(String),
}

impl RenderError {
    /// Errors after which the app cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RenderError::Context(_) | RenderError::OutOfMemory | RenderError::Upload(_)
        )
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "Graphics initialization failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Upload(e) => write!(f, "Frame upload failed: {}", e),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<UploadError> for RenderError {
    fn from(e: UploadError) -> Self {
        RenderError::Upload(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    blit_pipeline: BlitPipeline,
    canvas: Canvas,
    letterbox_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system for a window and a logical frame size
    pub fn new(
        window: Arc<Window>,
        logical_size: (u32, u32),
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let (width, height) = logical_size;
        let blit_pipeline = BlitPipeline::new(&context.device, context.format(), width, height);

        log::info!("Logical frame {}x{}", width, height);

        Ok(Self {
            context,
            blit_pipeline,
            canvas: Canvas::new(width, height),
            letterbox_color: Rgba8::from_array(render_config.letterbox_color).to_wgpu_color(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Render a single frame
    pub fn render_frame<G: Game>(&mut self, game: &G) -> Result<(), RenderError> {
        if self.context.is_minimized() {
            return Ok(());
        }

        game.draw(&mut self.canvas);
        self.blit_pipeline.upload(&self.context.queue, &self.canvas)?;

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let viewport = fit_viewport(self.size(), self.blit_pipeline.frame_size());
        self.blit_pipeline
            .render(&mut encoder, &view, viewport, self.letterbox_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::Context(ContextError::NoAdapter)),
            "Graphics initialization failed: No compatible graphics adapter found"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(RenderError::OutOfMemory.is_fatal());
        assert!(RenderError::Context(ContextError::NoAdapter).is_fatal());
        assert!(!RenderError::SurfaceLost.is_fatal());
        assert!(!RenderError::Other("timeout".to_string()).is_fatal());
    }
}
