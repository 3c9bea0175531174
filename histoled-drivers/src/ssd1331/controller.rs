//! SSD1331 display controller
//!
//! # State machine
//!
//! ```text
//! Uninitialized ──initialize()──► Initializing ──ok──► Ready
//!       ▲                              │
//!       └────────────failed────────────┘
//! ```
//!
//! Drawing is only accepted in `Ready`. Bring-up failures follow the
//! configured [`FailurePolicy`]; once ready, draw commands are best
//! effort: a failed byte is counted and logged, and the call still
//! succeeds.

use histoled_core::config::{ControllerConfig, FailurePolicy};
use histoled_core::traits::PrimitiveDisplay;
use histoled_core::{DisplayError, PreconditionError, Rgb, TransportError, Window};
use histoled_hal::{Delay, OutputPin, SpiBus};

use super::command::{self, INIT_SEQUENCE};
use super::transport::{CommandStats, CommandTransport};

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
}

/// SSD1331 96x64 OLED in command mode
pub struct Ssd1331<SPI, CS, DC, RST, D> {
    transport: CommandTransport<SPI, CS, DC, D>,
    rst: RST,
    config: ControllerConfig,
    state: DisplayState,
}

impl<SPI, CS, DC, RST, D> Ssd1331<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, delay: D, config: ControllerConfig) -> Self {
        Self {
            transport: CommandTransport::new(spi, cs, dc, delay, config.transport),
            rst,
            config,
            state: DisplayState::Uninitialized,
        }
    }

    /// Reset the panel and run the bring-up sequence
    ///
    /// On success the panel has shown the red ready screen for
    /// `ready_hold_ms` and is cleared. On failure the controller drops
    /// back to `Uninitialized` and may be initialized again.
    pub fn initialize(&mut self) -> Result<(), DisplayError> {
        self.state = DisplayState::Initializing;

        match self.bring_up() {
            Ok(()) => {
                self.state = DisplayState::Ready;
                #[cfg(feature = "defmt")]
                defmt::info!("SSD1331 ready");
                Ok(())
            }
            Err(e) => {
                self.state = DisplayState::Uninitialized;
                #[cfg(feature = "defmt")]
                defmt::warn!("SSD1331 init failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Pulse reset: high, low, high with a settle delay after each edge
    fn reset(&mut self) {
        let settle = self.config.reset_delay_ms;
        self.rst.set_high();
        self.transport.delay_mut().delay_ms(settle);
        self.rst.set_low();
        self.transport.delay_mut().delay_ms(settle);
        self.rst.set_high();
        self.transport.delay_mut().delay_ms(settle);
    }

    fn bring_up(&mut self) -> Result<(), TransportError> {
        self.reset();
        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1331 reset, sending {} init bytes", INIT_SEQUENCE.len());

        let clear = command::clear_window(Window::FULL);
        let ready = command::draw_rect(Window::FULL, Rgb::RED, Rgb::RED);
        let mut first_error = None;

        self.init_step(INIT_SEQUENCE, &mut first_error)?;
        self.init_step(&clear, &mut first_error)?;
        self.init_step(&ready, &mut first_error)?;
        let hold = self.config.ready_hold_ms;
        self.transport.delay_mut().delay_ms(hold);
        self.init_step(&clear, &mut first_error)?;

        first_error.map_or(Ok(()), Err)
    }

    /// Under `Continue` a failure is remembered and bring-up carries on
    fn init_step(
        &mut self,
        bytes: &[u8],
        first_error: &mut Option<TransportError>,
    ) -> Result<(), TransportError> {
        let policy = self.config.init_policy;
        match self.transport.send_sequence(bytes, policy) {
            Err(e) if policy == FailurePolicy::Continue => {
                first_error.get_or_insert(e);
                Ok(())
            }
            other => other,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn stats(&self) -> CommandStats {
        self.transport.stats()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Clear an arbitrary window
    pub fn clear_window(&mut self, window: Window) -> Result<(), DisplayError> {
        self.check_window(window)?;
        self.send_best_effort(&command::clear_window(window));
        Ok(())
    }

    /// Show a full white screen for `duration_ms`, then clear
    pub fn flash(&mut self, duration_ms: u32) -> Result<(), DisplayError> {
        self.clear()?;
        self.draw_rect(Window::FULL, Rgb::WHITE, Rgb::WHITE)?;
        self.transport.delay_mut().delay_ms(duration_ms);
        self.clear()
    }

    /// Switch the panel on or off without touching its contents
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.send_best_effort(&[command::display_power(on)]);
        Ok(())
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (SPI, CS, DC, RST, D) {
        let (spi, cs, dc, delay) = self.transport.release();
        (spi, cs, dc, self.rst, delay)
    }

    fn ensure_ready(&self) -> Result<(), PreconditionError> {
        if self.state == DisplayState::Ready {
            Ok(())
        } else {
            Err(PreconditionError::NotInitialized)
        }
    }

    fn check_window(&self, window: Window) -> Result<(), PreconditionError> {
        self.ensure_ready()?;
        if window.fits_panel() {
            Ok(())
        } else {
            Err(PreconditionError::OutOfBounds)
        }
    }

    fn send_best_effort(&mut self, bytes: &[u8]) {
        if let Err(_e) = self.transport.send_sequence(bytes, FailurePolicy::Continue) {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1331 dropped {} byte command: {}", bytes.len(), _e);
        }
    }
}

impl<SPI, CS, DC, RST, D> PrimitiveDisplay for Ssd1331<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.clear_window(Window::FULL)
    }

    fn draw_line(&mut self, window: Window, color: Rgb) -> Result<(), DisplayError> {
        self.check_window(window)?;
        self.send_best_effort(&command::draw_line(window, color));
        Ok(())
    }

    fn draw_rect(&mut self, window: Window, outline: Rgb, fill: Rgb) -> Result<(), DisplayError> {
        self.check_window(window)?;
        self.send_best_effort(&command::draw_rect(window, outline, fill));
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.state == DisplayState::Ready
    }
}
