//! SSD1331 command set
//!
//! Opcode values and the fixed bring-up sequence, plus builders for the
//! three graphic acceleration commands the chart uses.
//!
//! # Wire format
//!
//! | Command | Bytes |
//! |---------|-------|
//! | Line    | `21 c0 r0 c1 r1 C B A` |
//! | Rect    | `22 c0 r0 c1 r1 C B A C B A` (outline, then fill) |
//! | Clear   | `25 c0 r0 c1 r1` |
//!
//! Colors go out as C (red), B (green, 6 bits), A (blue).

use histoled_core::{Rgb, Window};

/// SSD1331 opcodes
pub mod cmd {
    /// Draw line
    pub const DRAW_LINE: u8 = 0x21;
    /// Draw rectangle
    pub const DRAW_RECT: u8 = 0x22;
    /// Clear window
    pub const CLEAR: u8 = 0x25;
    /// Fill enable/disable for rectangles
    pub const FILL: u8 = 0x26;
    /// Contrast for color A
    pub const CONTRAST_A: u8 = 0x81;
    /// Contrast for color B
    pub const CONTRAST_B: u8 = 0x82;
    /// Contrast for color C
    pub const CONTRAST_C: u8 = 0x83;
    /// Master current control
    pub const MASTER_CURRENT: u8 = 0x87;
    /// Second precharge speed for color A
    pub const PRECHARGE_A: u8 = 0x8A;
    /// Second precharge speed for color B
    pub const PRECHARGE_B: u8 = 0x8B;
    /// Second precharge speed for color C
    pub const PRECHARGE_C: u8 = 0x8C;
    /// Remap and color depth
    pub const SET_REMAP: u8 = 0xA0;
    /// Display start line
    pub const START_LINE: u8 = 0xA1;
    /// Display offset
    pub const DISPLAY_OFFSET: u8 = 0xA2;
    /// Normal display mode
    pub const NORMAL_DISPLAY: u8 = 0xA4;
    /// Multiplex ratio
    pub const MULTIPLEX: u8 = 0xA8;
    /// Master configuration
    pub const MASTER_CONFIG: u8 = 0xAD;
    /// Display off (sleep)
    pub const DISPLAY_OFF: u8 = 0xAE;
    /// Display on
    pub const DISPLAY_ON: u8 = 0xAF;
    /// Power save mode
    pub const POWER_MODE: u8 = 0xB0;
    /// Phase 1 and 2 period adjustment
    pub const PRECHARGE: u8 = 0xB1;
    /// Clock divider and oscillator frequency
    pub const CLOCK_DIV: u8 = 0xB3;
    /// Precharge voltage level
    pub const PRECHARGE_LEVEL: u8 = 0xBB;
    /// VCOMH voltage
    pub const VCOMH: u8 = 0xBE;
}

/// Horizontal address increment, RGB order, COM split, 65k color
pub const REMAP_RGB_65K: u8 = 0x72;

/// Power-on bring-up, one byte per framed command
///
/// Ends with the display on and rectangle fill enabled.
pub const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_REMAP,
    REMAP_RGB_65K,
    cmd::START_LINE,
    0x00,
    cmd::DISPLAY_OFFSET,
    0x00,
    cmd::NORMAL_DISPLAY,
    cmd::MULTIPLEX,
    0x3F, // 1/64 duty
    cmd::MASTER_CONFIG,
    0x8E, // external VCC
    cmd::POWER_MODE,
    0x0B, // power save off
    cmd::PRECHARGE,
    0x31,
    cmd::CLOCK_DIV,
    0xF0,
    cmd::PRECHARGE_A,
    0x64,
    cmd::PRECHARGE_B,
    0x78,
    cmd::PRECHARGE_C,
    0x64,
    cmd::PRECHARGE_LEVEL,
    0x3A,
    cmd::VCOMH,
    0x3E,
    cmd::MASTER_CURRENT,
    0x06,
    cmd::CONTRAST_A,
    0x91,
    cmd::CONTRAST_B,
    0x50,
    cmd::CONTRAST_C,
    0x7D,
    cmd::DISPLAY_ON,
    cmd::FILL,
    0x01,
];

/// Build a line command from (`x0`,`y0`) to (`x1`,`y1`)
pub fn draw_line(window: Window, color: Rgb) -> [u8; 8] {
    let [c0, r0, c1, r1] = window.to_bytes();
    let [r, g, b] = color.to_bytes();
    [cmd::DRAW_LINE, c0, r0, c1, r1, r, g, b]
}

/// Build a rectangle command
///
/// With fill enabled the controller paints the interior in `fill`.
pub fn draw_rect(window: Window, outline: Rgb, fill: Rgb) -> [u8; 11] {
    let [c0, r0, c1, r1] = window.to_bytes();
    let [or, og, ob] = outline.to_bytes();
    let [fr, fg, fb] = fill.to_bytes();
    [cmd::DRAW_RECT, c0, r0, c1, r1, or, og, ob, fr, fg, fb]
}

/// Build a clear-window command
pub fn clear_window(window: Window) -> [u8; 5] {
    let [c0, r0, c1, r1] = window.to_bytes();
    [cmd::CLEAR, c0, r0, c1, r1]
}

/// Display on/off opcode
pub const fn display_power(on: bool) -> u8 {
    if on {
        cmd::DISPLAY_ON
    } else {
        cmd::DISPLAY_OFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sequence_bytes() {
        assert_eq!(
            INIT_SEQUENCE,
            &[
                0xAE, 0xA0, 0x72, 0xA1, 0x00, 0xA2, 0x00, 0xA4, 0xA8, 0x3F, 0xAD, 0x8E, 0xB0,
                0x0B, 0xB1, 0x31, 0xB3, 0xF0, 0x8A, 0x64, 0x8B, 0x78, 0x8C, 0x64, 0xBB, 0x3A,
                0xBE, 0x3E, 0x87, 0x06, 0x81, 0x91, 0x82, 0x50, 0x83, 0x7D, 0xAF, 0x26, 0x01,
            ]
        );
    }

    #[test]
    fn test_line_command() {
        let bytes = draw_line(Window::new(0, 57, 95, 57), Rgb::WHITE);
        assert_eq!(bytes, [0x21, 0, 57, 95, 57, 0xFF, 0x3F, 0xFF]);
    }

    #[test]
    fn test_rect_command_color_order() {
        let bytes = draw_rect(Window::FULL, Rgb::RED, Rgb::new(1, 2, 3));
        assert_eq!(
            bytes,
            [0x22, 0x00, 0x00, 0x5F, 0x3F, 0xFF, 0x00, 0x00, 0x01, 0x02, 0x03]
        );
    }

    #[test]
    fn test_clear_full_panel() {
        assert_eq!(clear_window(Window::FULL), [0x25, 0x00, 0x00, 0x5F, 0x3F]);
    }

    #[test]
    fn test_display_power() {
        assert_eq!(display_power(true), 0xAF);
        assert_eq!(display_power(false), 0xAE);
    }
}
