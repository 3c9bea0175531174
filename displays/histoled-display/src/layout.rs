//! Chart layout
//!
//! Columns are fixed for the 96x64 panel. Rows hang off the bar bottom:
//! the x-axis sits one row below it, tick pointers two rows below and
//! labels from three rows below. With the default 8-row margin that is
//! bars ending on row 56, axis 57, ticks 58 and labels 59-63.

use histoled_core::{Rgb, Window};

/// Bins the column table provides
pub const MAX_BINS: usize = 16;

/// Column pitch of one bin: bar plus gap
pub const BIN_PITCH: u8 = 6;

/// Bar width in columns
pub const BAR_WIDTH: u8 = 5;

/// First bar column; column 0 belongs to the y-axis
pub const FIRST_BAR_COL: u8 = 1;

/// Rows below the bar bottom
pub const AXIS_OFFSET: u8 = 1;
pub const TICK_OFFSET: u8 = 2;
pub const LABEL_OFFSET: u8 = 3;

/// Inclusive (start, end) columns of each bin's bar
pub const BIN_COLUMNS: [(u8, u8); MAX_BINS] = bin_columns();

const fn bin_columns() -> [(u8, u8); MAX_BINS] {
    let mut cols = [(0u8, 0u8); MAX_BINS];
    let mut i = 0;
    while i < MAX_BINS {
        let start = FIRST_BAR_COL + i as u8 * BIN_PITCH;
        cols[i] = (start, start + BAR_WIDTH - 1);
        i += 1;
    }
    cols
}

/// A fixed line of the chart frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stroke {
    pub window: Window,
    pub color: Rgb,
}

/// A fixed axis label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
    pub x: u8,
    pub y: u8,
    pub color: Rgb,
}

const TICK_COLOR: Rgb = Rgb::GREEN;

/// Y-axis then x-axis for bars ending on `bottom`
pub const fn axes(bottom: u8) -> [Stroke; 2] {
    let row = bottom.saturating_add(AXIS_OFFSET);
    [
        Stroke {
            window: Window::new(0, 0, 0, row),
            color: Rgb::WHITE,
        },
        Stroke {
            window: Window::new(0, row, 95, row),
            color: Rgb::WHITE,
        },
    ]
}

/// Tick pointer columns, 100 sample units apart
pub const TICK_COLUMNS: [u8; 4] = [0, 30, 60, 90];

/// One-pixel pointers under the x-axis
pub const fn ticks(bottom: u8) -> [Stroke; 4] {
    let row = bottom.saturating_add(TICK_OFFSET);
    [
        tick(TICK_COLUMNS[0], row),
        tick(TICK_COLUMNS[1], row),
        tick(TICK_COLUMNS[2], row),
        tick(TICK_COLUMNS[3], row),
    ]
}

const fn tick(col: u8, row: u8) -> Stroke {
    Stroke {
        window: Window::new(col, row, col, row),
        color: TICK_COLOR,
    }
}

/// Labels are placed so each number sits under its pointer
pub const fn labels(bottom: u8) -> [Label; 4] {
    let row = bottom.saturating_add(LABEL_OFFSET);
    [
        label("0", 0, row),
        label("100", 26, row),
        label("200", 55, row),
        label("300", 85, row),
    ]
}

const fn label(text: &'static str, x: u8, y: u8) -> Label {
    Label {
        text,
        x,
        y,
        color: Rgb::WHITE,
    }
}
