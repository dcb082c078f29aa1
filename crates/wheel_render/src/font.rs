//! 8x8 bitmap text
//!
//! Glyphs come from `font8x8`: ASCII from the basic set, accented letters and
//! symbols such as `ü`, `ß` and `°` from the Latin-1 supplement. Anything else
//! renders as `?`.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

use crate::canvas::{Canvas, Rgba8};

pub const GLYPH_WIDTH: i32 = 8;
pub const GLYPH_HEIGHT: i32 = 8;

/// Bitmap for one character. Row-major, bit 0 is the leftmost pixel.
pub fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Draw one character with its top-left corner at `(x, y)`
pub fn draw_char(canvas: &mut Canvas, x: i32, y: i32, ch: char, color: Rgba8) {
    for (row, bits) in glyph(ch).iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1u8 << col) != 0 {
                canvas.put_pixel(x + col, y + row as i32, color);
            }
        }
    }
}

/// Draw text starting at `(x, y)`; `\n` starts a new line at `x`
pub fn draw_text(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgba8) {
    let mut cx = x;
    let mut cy = y;
    for ch in text.chars() {
        if ch == '\n' {
            cx = x;
            cy += GLYPH_HEIGHT;
            continue;
        }
        draw_char(canvas, cx, cy, ch, color);
        cx += GLYPH_WIDTH;
    }
}

/// Draw a single line of text horizontally centred on `center_x`
pub fn draw_text_centered(canvas: &mut Canvas, center_x: i32, y: i32, text: &str, color: Rgba8) {
    draw_text(canvas, center_x - text_width(text) / 2, y, text, color);
}

/// Width in pixels of the widest line
pub fn text_width(text: &str) -> i32 {
    text.lines()
        .map(|line| line.chars().count() as i32 * GLYPH_WIDTH)
        .max()
        .unwrap_or(0)
}
