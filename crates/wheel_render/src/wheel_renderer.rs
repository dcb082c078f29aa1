//! Draws the wheel into a [`Canvas`]
//!
//! Rendering only reads [`WheelState`]; it never mutates it. Given the same
//! state, segments and banner the output is pixel-identical.

use wheel_core::{angle, Segments, WheelState};

use crate::canvas::{Canvas, Rgba8};
use crate::font;
use crate::primitives;

/// Wheel centre x in logical pixels
pub const WHEEL_CENTER_X: f64 = 160.0;
/// Wheel centre y in logical pixels
pub const WHEEL_CENTER_Y: f64 = 120.0;
/// Wheel radius in logical pixels
pub const WHEEL_RADIUS: f64 = 80.0;
/// Gap between the rim and the result label
pub const RESULT_GAP: f64 = 20.0;

/// Colours and detail settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStyle {
    pub background: Rgba8,
    /// Rim and divider colour
    pub wheel: Rgba8,
    pub pointer: Rgba8,
    pub text: Rgba8,
    /// Straight segments used to approximate the rim
    pub circle_steps: u32,
    /// Draw the `Winkel: N°` readout
    pub show_angle: bool,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(30, 30, 30),
            wheel: Rgba8::rgb(139, 90, 43),
            pointer: Rgba8::rgb(245, 222, 156),
            text: Rgba8::WHITE,
            circle_steps: 64,
            show_angle: true,
        }
    }
}

/// Renders wheel state onto the logical frame
#[derive(Debug, Clone, Default)]
pub struct WheelRenderer {
    style: WheelStyle,
}

impl WheelRenderer {
    pub fn new(style: WheelStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &WheelStyle {
        &self.style
    }

    /// Render a full frame.
    ///
    /// `banner` is centred at the top of the frame when present.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        state: &WheelState,
        segments: &Segments,
        banner: Option<&str>,
    ) {
        let style = &self.style;
        let (cx, cy, r) = (WHEEL_CENTER_X, WHEEL_CENTER_Y, WHEEL_RADIUS);

        canvas.fill(style.background);

        // Rim
        primitives::circle_outline(canvas, cx, cy, r, style.circle_steps, style.wheel);

        // Sector dividers
        let count = segments.len();
        for i in 0..count {
            primitives::spoke(canvas, cx, cy, r, angle::sector_boundary(i, count), style.wheel);
        }

        // Pointer
        primitives::spoke(canvas, cx, cy, r, state.angle(), style.pointer);

        if let Some(text) = banner {
            font::draw_text_centered(canvas, cx as i32, 5, text, style.text);
        }

        if style.show_angle {
            let readout = format!("Winkel: {:.0}°", state.display_degrees());
            font::draw_text(canvas, 2, 2, &readout, style.text);
        }

        // Winner below the wheel
        if let Some(label) = state.result().and_then(|i| segments.label(i)) {
            let y = (cy + r + RESULT_GAP) as i32;
            font::draw_text_centered(canvas, cx as i32, y, label, style.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
    use wheel_core::{FixedSpeed, SpinParams, Wheel};

    fn canvas() -> Canvas {
        Canvas::new(LOGICAL_WIDTH, LOGICAL_HEIGHT)
    }

    fn has_color_in_rows(canvas: &Canvas, rows: std::ops::Range<i32>, color: Rgba8) -> bool {
        rows.into_iter().any(|y| {
            (0..canvas.width() as i32).any(|x| canvas.pixel(x, y) == Some(color))
        })
    }

    #[test]
    fn test_render_idle_wheel() {
        let renderer = WheelRenderer::default();
        let mut canvas = canvas();
        renderer.render(&mut canvas, &WheelState::default(), &Segments::default(), None);

        let style = renderer.style();
        assert_eq!(canvas.pixel(0, LOGICAL_HEIGHT as i32 - 1), Some(style.background));
        assert!(canvas.count_color(style.wheel) > 0);
        assert!(canvas.count_color(style.pointer) > 0);
        // Pointer at angle 0 runs from the centre to the right rim
        assert_eq!(canvas.pixel(200, 120), Some(style.pointer));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut wheel = Wheel::new(Segments::default(), SpinParams::default(), FixedSpeed(0.9));
        wheel.trigger_spin();
        for _ in 0..17 {
            wheel.step();
        }
        let snapshot = wheel.state().clone();

        let renderer = WheelRenderer::default();
        let mut first = canvas();
        let mut second = canvas();
        renderer.render(&mut first, wheel.state(), wheel.segments(), Some("banner"));
        renderer.render(&mut second, wheel.state(), wheel.segments(), Some("banner"));

        assert_eq!(first, second);
        assert_eq!(wheel.state(), &snapshot);
    }

    #[test]
    fn test_render_overwrites_previous_frame() {
        let renderer = WheelRenderer::default();
        let mut canvas = canvas();
        canvas.fill(Rgba8::rgb(1, 2, 3));
        renderer.render(&mut canvas, &WheelState::default(), &Segments::default(), None);
        assert_eq!(canvas.count_color(Rgba8::rgb(1, 2, 3)), 0);
    }

    #[test]
    fn test_result_label_only_when_resolved() {
        let renderer = WheelRenderer::default();
        let text = renderer.style().text;
        let result_rows = 220..228;

        let mut idle = canvas();
        renderer.render(&mut idle, &WheelState::default(), &Segments::default(), None);
        assert!(!has_color_in_rows(&idle, result_rows.clone(), text));

        let mut wheel = Wheel::new(Segments::default(), SpinParams::default(), FixedSpeed(0.5));
        wheel.trigger_spin();
        wheel.run_to_rest();
        let mut resolved = canvas();
        renderer.render(&mut resolved, wheel.state(), wheel.segments(), None);
        assert!(has_color_in_rows(&resolved, result_rows, text));
    }

    #[test]
    fn test_banner_drawn_at_top() {
        let renderer = WheelRenderer::new(WheelStyle {
            show_angle: false,
            ..WheelStyle::default()
        });
        let text = renderer.style().text;

        let mut plain = canvas();
        renderer.render(&mut plain, &WheelState::default(), &Segments::default(), None);
        assert!(!has_color_in_rows(&plain, 0..20, text));

        let mut with_banner = canvas();
        renderer.render(
            &mut with_banner,
            &WheelState::default(),
            &Segments::default(),
            Some("SPACE drücken!"),
        );
        assert!(has_color_in_rows(&with_banner, 5..13, text));
    }

    #[test]
    fn test_angle_readout_toggle() {
        let hidden = WheelRenderer::new(WheelStyle {
            show_angle: false,
            ..WheelStyle::default()
        });
        let shown = WheelRenderer::default();

        let mut a = canvas();
        let mut b = canvas();
        hidden.render(&mut a, &WheelState::default(), &Segments::default(), None);
        shown.render(&mut b, &WheelState::default(), &Segments::default(), None);
        assert_ne!(a, b);
    }
}
