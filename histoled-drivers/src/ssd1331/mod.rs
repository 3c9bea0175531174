//! SSD1331 color OLED driver
//!
//! The panel is driven entirely through its command interface: every byte,
//! opcodes and parameters alike, goes out as its own framed command with
//! D/C low. Drawing uses the controller's accelerated line, rectangle and
//! clear-window commands, so no frame buffer is kept on the MCU.
//!
//! ```text
//!   Ssd1331 (state, init sequence, primitives)
//!      │
//!   CommandTransport (CS framing, D/C, timeout)
//!      │
//!   SpiBus / OutputPin / Delay
//! ```

pub mod command;
mod controller;
mod transport;

#[cfg(test)]
mod mock;

pub use controller::{DisplayState, Ssd1331};
pub use transport::{CommandStats, CommandTransport};
