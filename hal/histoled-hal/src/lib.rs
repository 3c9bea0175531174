//! histoled Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the display driver
//! needs: three digital outputs, a byte-wide SPI transfer and a blocking
//! delay. Chip support comes from any `embedded-hal` 1.0 implementation
//! through the [`Compat`] adapter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  histoled-drivers (SSD1331 transport)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  histoled-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Compat<T> over embedded-hal 1.0        │
//! │  (embassy-rp, host mocks, ...)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip-select, data/command and reset lines
//! - [`spi::SpiBus`] - Single-byte SPI master transfer with a bounded timeout
//! - [`delay::Delay`] - Blocking waits between control-line transitions

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use compat::Compat;
pub use delay::Delay;
pub use gpio::OutputPin;
pub use spi::{SpiBus, SpiError};
