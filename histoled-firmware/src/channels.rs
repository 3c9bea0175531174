//! Inter-task communication channels
//!
//! Defines the static signals used between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use histoled_core::config::DEFAULT_BIN_COUNT;
use histoled_core::Frame;

/// Bins per chart frame
pub const BIN_COUNT: usize = DEFAULT_BIN_COUNT;

/// Latest histogram frame (updated by the sampler task).
/// Only the newest frame matters; an unread one is overwritten.
pub static FRAME_READY: Signal<CriticalSectionRawMutex, Frame<BIN_COUNT>> = Signal::new();
