//! Panel geometry
//!
//! Coordinates are panel pixels with the origin at the top-left corner.
//! Every window is inclusive on both ends, matching the controller's
//! column/row addressing.

/// Panel width in pixels (columns 0x00-0x5F)
pub const PANEL_WIDTH: u8 = 96;

/// Panel height in pixels (rows 0x00-0x3F)
pub const PANEL_HEIGHT: u8 = 64;

/// Last addressable column
pub const MAX_COL: u8 = PANEL_WIDTH - 1;

/// Last addressable row
pub const MAX_ROW: u8 = PANEL_HEIGHT - 1;

/// Inclusive rectangular window, also used for line end points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub x0: u8,
    pub y0: u8,
    pub x1: u8,
    pub y1: u8,
}

impl Window {
    /// The whole panel, (0,0)-(95,63)
    pub const FULL: Window = Window::new(0, 0, MAX_COL, MAX_ROW);

    pub const fn new(x0: u8, y0: u8, x1: u8, y1: u8) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Shift by a column/row offset, saturating at the u8 range
    pub const fn offset(self, dx: u8, dy: u8) -> Self {
        Self {
            x0: self.x0.saturating_add(dx),
            y0: self.y0.saturating_add(dy),
            x1: self.x1.saturating_add(dx),
            y1: self.y1.saturating_add(dy),
        }
    }

    /// Whether every corner lies on the panel
    pub const fn fits_panel(&self) -> bool {
        self.x0 <= MAX_COL && self.x1 <= MAX_COL && self.y0 <= MAX_ROW && self.y1 <= MAX_ROW
    }

    /// Wire order: column start, row start, column end, row end
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window_bytes() {
        assert_eq!(Window::FULL.to_bytes(), [0x00, 0x00, 0x5F, 0x3F]);
        assert!(Window::FULL.fits_panel());
    }

    #[test]
    fn test_fits_panel() {
        assert!(Window::new(95, 63, 95, 63).fits_panel());
        assert!(!Window::new(0, 0, 96, 10).fits_panel());
        assert!(!Window::new(0, 64, 0, 0).fits_panel());
    }

    #[test]
    fn test_offset_saturates() {
        let w = Window::new(1, 2, 250, 4).offset(10, 1);
        assert_eq!(w, Window::new(11, 3, 255, 5));
    }
}
