//! Command framing over SPI
//!
//! Each byte is its own transaction:
//!
//! 1. CS high, setup delay, CS low (forces a falling edge)
//! 2. D/C low (command)
//! 3. one blocking byte transfer with a bounded timeout
//! 4. CS high, also when the transfer failed

use histoled_core::config::{FailurePolicy, TransportConfig};
use histoled_core::TransportError;
use histoled_hal::{Delay, OutputPin, SpiBus, SpiError};

/// Running byte counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandStats {
    /// Bytes that went out
    pub sent: u32,
    /// Bytes whose transfer failed
    pub failed: u32,
}

/// Frames single command bytes onto the bus
pub struct CommandTransport<SPI, CS, DC, D> {
    spi: SPI,
    cs: CS,
    dc: DC,
    delay: D,
    config: TransportConfig,
    stats: CommandStats,
}

impl<SPI, CS, DC, D> CommandTransport<SPI, CS, DC, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: Delay,
{
    /// Take ownership of the bus and control lines
    ///
    /// Chip-select starts deasserted.
    pub fn new(spi: SPI, mut cs: CS, dc: DC, delay: D, config: TransportConfig) -> Self {
        cs.set_high();
        Self {
            spi,
            cs,
            dc,
            delay,
            config,
            stats: CommandStats::default(),
        }
    }

    /// Send one byte as a command
    pub fn send_command(&mut self, byte: u8) -> Result<(), TransportError> {
        self.cs.set_high();
        self.delay.delay_us(self.config.cs_setup_delay_us);
        self.cs.set_low();
        self.dc.set_low();

        let result = self
            .spi
            .transfer_byte(byte, self.config.byte_timeout_us)
            .map(|_| ())
            .map_err(map_spi_error);

        self.cs.set_high();

        match result {
            Ok(()) => self.stats.sent = self.stats.sent.wrapping_add(1),
            Err(_) => self.stats.failed = self.stats.failed.wrapping_add(1),
        }
        result
    }

    /// Send each byte as its own framed command, stopping at the first failure
    pub fn send_commands(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        bytes.iter().try_for_each(|&b| self.send_command(b))
    }

    /// Send a byte group under `policy`
    ///
    /// With [`FailurePolicy::Continue`] every byte is attempted and the
    /// first failure is returned at the end.
    pub fn send_sequence(
        &mut self,
        bytes: &[u8],
        policy: FailurePolicy,
    ) -> Result<(), TransportError> {
        match policy {
            FailurePolicy::AbortOnError => self.send_commands(bytes),
            FailurePolicy::Continue => {
                let mut first = None;
                for &b in bytes {
                    if let Err(e) = self.send_command(b) {
                        first.get_or_insert(e);
                    }
                }
                first.map_or(Ok(()), Err)
            }
        }
    }

    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    pub fn stats(&self) -> CommandStats {
        self.stats
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (SPI, CS, DC, D) {
        (self.spi, self.cs, self.dc, self.delay)
    }
}

fn map_spi_error(e: SpiError) -> TransportError {
    match e {
        SpiError::Timeout => TransportError::Timeout,
        SpiError::Overrun | SpiError::Bus => TransportError::Bus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssd1331::mock::{Event, Line, Log, MockBus, MockDelay, MockPin};

    fn transport(log: &Log) -> CommandTransport<MockBus<'_>, MockPin<'_>, MockPin<'_>, MockDelay<'_>> {
        CommandTransport::new(
            MockBus::new(log),
            MockPin::new(log, Line::Cs),
            MockPin::new(log, Line::Dc),
            MockDelay::new(log),
            TransportConfig::default(),
        )
    }

    #[test]
    fn test_new_deasserts_cs() {
        let log = Log::new();
        let _t = transport(&log);
        assert_eq!(log.events().as_slice(), &[Event::Cs(true)]);
    }

    #[test]
    fn test_framing_order() {
        let log = Log::new();
        let mut t = transport(&log);
        log.clear();

        t.send_command(0xAE).unwrap();
        assert_eq!(
            log.events().as_slice(),
            &[
                Event::Cs(true),
                Event::DelayUs(10),
                Event::Cs(false),
                Event::Dc(false),
                Event::Byte(0xAE),
                Event::Cs(true),
            ]
        );
        assert_eq!(t.stats(), CommandStats { sent: 1, failed: 0 });
    }

    #[test]
    fn test_failure_still_releases_cs() {
        let log = Log::new();
        let mut t = transport(&log);
        log.fail_transfer(0);
        log.clear();

        assert_eq!(t.send_command(0x25), Err(TransportError::Timeout));
        let events = log.events();
        assert_eq!(events.last(), Some(&Event::Cs(true)));
        assert!(events.contains(&Event::Failed(0x25)));
        assert_eq!(t.stats(), CommandStats { sent: 0, failed: 1 });
    }

    #[test]
    fn test_send_commands_stops_at_failure() {
        let log = Log::new();
        let mut t = transport(&log);
        log.fail_transfer(1);

        assert_eq!(
            t.send_commands(&[1, 2, 3, 4]),
            Err(TransportError::Timeout)
        );
        assert_eq!(log.bytes().as_slice(), &[1]);
        assert_eq!(log.transfers(), 2);
    }

    #[test]
    fn test_sequence_continue_sends_everything() {
        let log = Log::new();
        let mut t = transport(&log);
        log.fail_transfer(1);

        assert_eq!(
            t.send_sequence(&[1, 2, 3, 4], FailurePolicy::Continue),
            Err(TransportError::Timeout)
        );
        assert_eq!(log.bytes().as_slice(), &[1, 3, 4]);
        assert_eq!(t.stats(), CommandStats { sent: 3, failed: 1 });
    }

    #[test]
    fn test_spi_error_mapping() {
        assert_eq!(map_spi_error(SpiError::Timeout), TransportError::Timeout);
        assert_eq!(map_spi_error(SpiError::Overrun), TransportError::Bus);
        assert_eq!(map_spi_error(SpiError::Bus), TransportError::Bus);
    }
}
