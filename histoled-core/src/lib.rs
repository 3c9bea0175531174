//! Board-agnostic core logic for the histoled bar-chart display
//!
//! This crate contains everything that does not depend on a specific
//! display controller or microcontroller:
//!
//! - Panel geometry and color types
//! - Error taxonomy shared by drivers and renderers
//! - Configuration type definitions
//! - Adaptive growth-scale computation
//! - Histogram binning and frame-to-frame change tracking
//! - Hardware abstraction traits (primitive display, magnitude source)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bins;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod traits;

pub use bins::{Bin, Frame, FrameTracker, Histogram};
pub use color::Rgb;
pub use error::{ConfigError, DisplayError, PreconditionError, SourceError, TransportError};
pub use geometry::{Window, PANEL_HEIGHT, PANEL_WIDTH};
pub use scale::{GrowthScale, SUBPIXELS};
