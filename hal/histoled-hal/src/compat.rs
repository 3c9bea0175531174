//! Adapter from `embedded-hal` 1.0 traits
//!
//! Wrapping a peripheral in [`Compat`] makes it usable wherever this crate's
//! traits are expected:
//!
//! ```ignore
//! let cs = Compat(Output::new(p.PIN_17, Level::High));
//! let spi = Compat(Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, config));
//! let delay = Compat(embassy_time::Delay);
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::spi::{self, Error as _, ErrorKind};

use crate::delay::Delay;
use crate::gpio::OutputPin;
use crate::spi::{SpiBus, SpiError};

/// Newtype adapter over an `embedded-hal` peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compat<T>(pub T);

impl<T> Compat<T> {
    /// Unwrap the inner peripheral
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: digital::OutputPin> OutputPin for Compat<T> {
    fn set_high(&mut self) {
        // GPIO errors are infallible on every supported chip
        let _ = self.0.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.0.set_low();
    }
}

/// Blocking `embedded-hal` buses have no timeout of their own; the
/// peripheral driver is expected to bound the transfer. `timeout_us`
/// is therefore advisory here.
impl<T: spi::SpiBus> SpiBus for Compat<T> {
    fn transfer_byte(&mut self, byte: u8, _timeout_us: u32) -> Result<u8, SpiError> {
        let mut buf = [byte];
        self.0.transfer_in_place(&mut buf).map_err(map_spi_error)?;
        self.0.flush().map_err(map_spi_error)?;
        Ok(buf[0])
    }
}

impl<T: DelayNs> Delay for Compat<T> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

fn map_spi_error<E: spi::Error>(e: E) -> SpiError {
    match e.kind() {
        ErrorKind::Overrun => SpiError::Overrun,
        _ => SpiError::Bus,
    }
}
