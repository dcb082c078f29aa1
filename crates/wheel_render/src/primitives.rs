//! Line and circle rasterization on a [`Canvas`]

use std::f64::consts::TAU;

use crate::canvas::{Canvas, Rgba8};

/// Bresenham line between two integer points, endpoints inclusive
pub fn line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    // Trivially outside on one side
    if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h) {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        canvas.put_pixel(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Line between two points in logical-pixel float coordinates
pub fn line_f(canvas: &mut Canvas, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba8) {
    line(
        canvas,
        x0.round() as i32,
        y0.round() as i32,
        x1.round() as i32,
        y1.round() as i32,
        color,
    );
}

/// Point on a circle at `angle` radians (0 = +x, growing clockwise on screen)
pub fn point_on_circle(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Circle outline approximated by `steps` straight segments
pub fn circle_outline(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, steps: u32, color: Rgba8) {
    let steps = steps.max(3);
    for i in 0..steps {
        let a1 = TAU * i as f64 / steps as f64;
        let a2 = TAU * (i + 1) as f64 / steps as f64;
        let (x1, y1) = point_on_circle(cx, cy, radius, a1);
        let (x2, y2) = point_on_circle(cx, cy, radius, a2);
        line_f(canvas, x1, y1, x2, y2, color);
    }
}

/// Radial line from the centre to the rim at `angle`
pub fn spoke(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, angle: f64, color: Rgba8) {
    let (x, y) = point_on_circle(cx, cy, radius, angle);
    line_f(canvas, cx, cy, x, y, color);
}
