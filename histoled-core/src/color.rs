//! Panel colors
//!
//! The SSD1331 drawing commands take three color bytes. Red and blue use the
//! full byte; green is packed into 6 bits, so anything above 0x3F is masked.

/// Maximum green channel value (6-bit)
pub const GREEN_MAX: u8 = 0x3F;

/// Drawing color as sent to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, GREEN_MAX, 0xFF);
    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, GREEN_MAX, 0x00);

    /// Build a color; green is masked to 6 bits
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g: g & GREEN_MAX,
            b,
        }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Keep green, zero red and blue unless `keep` is set
    ///
    /// This is how unchanged bins are dimmed.
    pub const fn mask_non_green(self, keep: bool) -> Self {
        if keep {
            self
        } else {
            Rgb::new(0, self.g, 0)
        }
    }

    /// Wire order: C (red), B (green), A (blue)
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_is_masked() {
        let c = Rgb::new(0x12, 0xFF, 0x34);
        assert_eq!(c.g(), 0x3F);
        assert_eq!(c.to_bytes(), [0x12, 0x3F, 0x34]);
    }

    #[test]
    fn test_mask_non_green() {
        assert_eq!(Rgb::WHITE.mask_non_green(true), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.mask_non_green(false), Rgb::GREEN);
        assert_eq!(Rgb::RED.mask_non_green(false), Rgb::BLACK);
    }
}
