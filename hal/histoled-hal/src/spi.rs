//! SPI bus abstractions
//!
//! The SSD1331 command protocol frames every byte individually, so the bus
//! trait is a single blocking byte exchange rather than a buffer transfer.

/// Errors reported by an SPI byte transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError {
    /// The transfer did not complete within the timeout
    Timeout,
    /// Receive overrun
    Overrun,
    /// Any other bus-level failure
    Bus,
}

/// SPI bus master
pub trait SpiBus {
    /// Clock one byte out while clocking one byte in
    ///
    /// Blocks until the byte has been shifted or `timeout_us` elapses,
    /// whichever comes first.
    ///
    /// The bound only holds where the bus itself can time out. Adapters over
    /// buses without one (such as [`Compat`](crate::compat::Compat) over a
    /// blocking `embedded-hal` bus) treat `timeout_us` as advisory and block
    /// until the peripheral finishes.
    fn transfer_byte(&mut self, byte: u8, timeout_us: u32) -> Result<u8, SpiError>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    fn transfer_byte(&mut self, byte: u8, timeout_us: u32) -> Result<u8, SpiError> {
        (**self).transfer_byte(byte, timeout_us)
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            // SSD1331 samples on the rising edge with SCK idling high
            mode: Mode::Mode3,
        }
    }
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl Mode {
    /// Clock idles high (CPOL=1)
    pub fn idle_high(self) -> bool {
        matches!(self, Mode::Mode2 | Mode::Mode3)
    }

    /// Data captured on the second clock transition (CPHA=1)
    pub fn capture_on_second_transition(self) -> bool {
        matches!(self, Mode::Mode1 | Mode::Mode3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_bits() {
        assert!(!Mode::Mode0.idle_high());
        assert!(!Mode::Mode0.capture_on_second_transition());
        assert!(!Mode::Mode1.idle_high());
        assert!(Mode::Mode1.capture_on_second_transition());
        assert!(Mode::Mode2.idle_high());
        assert!(!Mode::Mode2.capture_on_second_transition());
        assert!(Mode::Mode3.idle_high());
        assert!(Mode::Mode3.capture_on_second_transition());
    }

    #[test]
    fn test_default_config() {
        let config = SpiConfig::default();
        assert_eq!(config.frequency, 1_000_000);
        assert_eq!(config.mode, Mode::Mode3);
    }
}
