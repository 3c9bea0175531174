//! Digit glyphs built from line segments
//!
//! Each glyph is 5 rows tall and drawn with the panel's line command.
//! Segment coordinates are relative to the glyph's top-left corner.

use histoled_core::traits::PrimitiveDisplay;
use histoled_core::{DisplayError, Rgb, Window};

/// Glyph height in rows
pub const GLYPH_HEIGHT: u8 = 5;

/// Blank columns between glyphs
pub const GLYPH_SPACING: u8 = 1;

/// A character as a set of line segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Columns covered
    pub width: u8,
    /// Segments, each as an inclusive start/end pair
    pub segments: &'static [Window],
}

impl Glyph {
    /// Horizontal distance to the next glyph's origin
    pub const fn advance(&self) -> u8 {
        self.width + GLYPH_SPACING
    }
}

const fn seg(x0: u8, y0: u8, x1: u8, y1: u8) -> Window {
    Window::new(x0, y0, x1, y1)
}

/// Digits 0-9
pub static DIGITS: [Glyph; 10] = [
    Glyph {
        width: 3,
        segments: &[seg(0, 0, 0, 4), seg(2, 0, 2, 4), seg(1, 0, 1, 0), seg(1, 4, 1, 4)],
    },
    Glyph {
        width: 1,
        segments: &[seg(0, 0, 0, 4)],
    },
    Glyph {
        width: 3,
        segments: &[
            seg(0, 0, 2, 0),
            seg(0, 2, 2, 2),
            seg(0, 4, 2, 4),
            seg(2, 1, 2, 1),
            seg(0, 3, 0, 3),
        ],
    },
    Glyph {
        width: 3,
        segments: &[
            seg(0, 0, 2, 0),
            seg(0, 2, 2, 2),
            seg(0, 4, 2, 4),
            seg(2, 1, 2, 1),
            seg(2, 3, 2, 3),
        ],
    },
    Glyph {
        width: 3,
        segments: &[seg(0, 0, 0, 2), seg(2, 0, 2, 4), seg(1, 2, 1, 2)],
    },
    Glyph {
        width: 3,
        segments: &[
            seg(0, 0, 2, 0),
            seg(0, 2, 2, 2),
            seg(0, 4, 2, 4),
            seg(0, 1, 0, 1),
            seg(2, 3, 2, 3),
        ],
    },
    Glyph {
        width: 3,
        segments: &[
            seg(0, 0, 2, 0),
            seg(0, 0, 0, 4),
            seg(0, 4, 2, 4),
            seg(2, 2, 2, 4),
            seg(1, 2, 1, 2),
        ],
    },
    Glyph {
        width: 3,
        segments: &[seg(0, 0, 2, 0), seg(2, 1, 2, 4)],
    },
    Glyph {
        width: 3,
        segments: &[
            seg(0, 0, 0, 4),
            seg(2, 0, 2, 4),
            seg(1, 0, 1, 0),
            seg(1, 2, 1, 2),
            seg(1, 4, 1, 4),
        ],
    },
    Glyph {
        width: 3,
        segments: &[
            seg(0, 0, 2, 0),
            seg(0, 0, 0, 2),
            seg(1, 2, 1, 2),
            seg(2, 0, 2, 4),
            seg(0, 4, 2, 4),
        ],
    },
];

/// Look up the glyph for a character
pub fn glyph(c: char) -> Option<&'static Glyph> {
    c.to_digit(10).map(|d| &DIGITS[d as usize])
}

/// Width of `text` including inter-glyph spacing; unknown characters take no room
pub fn text_width(text: &str) -> u8 {
    let total: u8 = text
        .chars()
        .filter_map(glyph)
        .fold(0u8, |acc, g| acc.saturating_add(g.advance()));
    total.saturating_sub(GLYPH_SPACING)
}

/// Draw `text` with its top-left corner at (`x`, `y`)
///
/// Characters without a glyph are skipped.
pub fn draw_text<D: PrimitiveDisplay>(
    display: &mut D,
    text: &str,
    x: u8,
    y: u8,
    color: Rgb,
) -> Result<(), DisplayError> {
    let mut cursor = x;
    for g in text.chars().filter_map(glyph) {
        for segment in g.segments {
            display.draw_line(segment.offset(cursor, y), color)?;
        }
        cursor = cursor.saturating_add(g.advance());
    }
    Ok(())
}
