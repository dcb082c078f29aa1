//! Logical screen size and how it maps onto the window
//!
//! The wheel is always drawn at 320x240. The real surface can be any size; the
//! frame is scaled uniformly and centred, with bars filling the leftover space.

/// Logical frame width in pixels
pub const LOGICAL_WIDTH: u32 = 320;
/// Logical frame height in pixels
pub const LOGICAL_HEIGHT: u32 = 240;

/// Report the logical resolution. The outer window size does not affect it.
pub fn logical_size(_outside_width: u32, _outside_height: u32) -> (u32, u32) {
    (LOGICAL_WIDTH, LOGICAL_HEIGHT)
}

/// Region of the surface the logical frame is scaled into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// True if there is nothing to draw into
    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}

/// Largest aspect-preserving rectangle for `logical` inside `surface`, centred.
///
/// Results are whole pixels and never extend past the surface.
pub fn fit_viewport(surface: (u32, u32), logical: (u32, u32)) -> Viewport {
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);
    let (lw, lh) = (logical.0 as f32, logical.1 as f32);

    if sw <= 0.0 || sh <= 0.0 || lw <= 0.0 || lh <= 0.0 {
        return Viewport {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
    }

    let scale = (sw / lw).min(sh / lh);
    let width = (lw * scale).floor().min(sw);
    let height = (lh * scale).floor().min(sh);

    Viewport {
        x: ((sw - width) / 2.0).floor(),
        y: ((sh - height) / 2.0).floor(),
        width,
        height,
    }
}
