//! Tiny 3x5 bitmap font
//!
//! Uppercase letters, digits and the punctuation the HUDs actually use.
//! Glyphs are five rows of three bits, most significant bit on the left.

use super::{FrameBuffer, Shade};

const GLYPH_W: i32 = 3;
const GLYPH_H: i32 = 5;
/// Advance per character (one pixel of spacing)
const ADVANCE: i32 = GLYPH_W + 1;

fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b010, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        ' ' => [0, 0, 0, 0, 0],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '[' => [0b110, 0b100, 0b100, 0b100, 0b110],
        ']' => [0b011, 0b001, 0b001, 0b001, 0b011],
        '(' => [0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => [0b010, 0b001, 0b001, 0b001, 0b010],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '@' => [0b010, 0b101, 0b111, 0b100, 0b011],
        '*' => [0b101, 0b010, 0b111, 0b010, 0b101],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '>' => [0b100, 0b010, 0b001, 0b010, 0b100],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        _ => return None,
    };
    Some(rows)
}

/// Pixel width of a string at the given scale
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * ADVANCE * scale - scale
}

/// Draw text with its top-left corner at (x, y). Lowercase is uppercased;
/// unknown characters render as blanks.
pub fn draw_text(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, shade: Shade, scale: i32) {
    let mut cx = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c.to_ascii_uppercase()) {
            for (ry, row) in rows.iter().enumerate() {
                for rx in 0..GLYPH_W {
                    if row & (0b100 >> rx) != 0 {
                        fb.fill_rect(
                            cx + rx * scale,
                            y + ry as i32 * scale,
                            scale,
                            scale,
                            shade,
                        );
                    }
                }
            }
        }
        cx += ADVANCE * scale;
    }
}

/// Draw text horizontally centered on `center_x`
pub fn draw_text_centered(
    fb: &mut FrameBuffer,
    center_x: i32,
    y: i32,
    text: &str,
    shade: Shade,
    scale: i32,
) {
    let x = center_x - text_width(text, scale) / 2;
    draw_text(fb, x, y, text, shade, scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_text_and_scale() {
        assert_eq!(text_width("A", 1), 3);
        assert_eq!(text_width("AB", 1), 7);
        assert_eq!(text_width("A", 2), 6);
    }

    #[test]
    fn draw_marks_pixels() {
        let mut fb = FrameBuffer::new();
        draw_text(&mut fb, 10, 10, "I", Shade::Green, 1);
        // Top row of 'I' is fully lit
        assert_eq!(fb.get(10, 10), Shade::Green);
        assert_eq!(fb.get(11, 10), Shade::Green);
        assert_eq!(fb.get(12, 10), Shade::Green);
        // Middle column only in row 2
        assert_eq!(fb.get(10, 11), Shade::Black);
        assert_eq!(fb.get(11, 11), Shade::Green);
    }

    #[test]
    fn lowercase_matches_uppercase() {
        let mut a = FrameBuffer::new();
        let mut b = FrameBuffer::new();
        draw_text(&mut a, 0, 0, "score", Shade::Green, 1);
        draw_text(&mut b, 0, 0, "SCORE", Shade::Green, 1);
        for y in 0..6 {
            for x in 0..24 {
                assert_eq!(a.get(x, y), b.get(x, y));
            }
        }
    }
}
