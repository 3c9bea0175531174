//! Bar-chart rendering for histoled
//!
//! This crate provides:
//! - `BarChartRenderer`, which turns per-bin magnitudes and changed flags
//!   into rectangles with an adaptive vertical scale
//! - Static chart layout: bin columns, axes, tick pointers and labels
//! - A digit glyph table drawn with line segments
//!
//! # Architecture
//!
//! The renderer only talks to a [`PrimitiveDisplay`](histoled_core::traits::PrimitiveDisplay),
//! so the same code drives the SSD1331 driver on hardware and a recording
//! display in tests.
//!
//! ```text
//!   row 0  ┌──────────────────────────────┐
//!          │ ▮ ▮ ▮ ▮  bars (rows 0..=56)  │
//!   row 57 ├──────────────────────────────┤ x-axis
//!   row 58 ╵         ╵         ╵         ╵  tick pointers
//!   row 59 0        100       200       300 labels (5 rows)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod chart;
pub mod glyph;
pub mod layout;

pub use chart::{Bar, BarChartRenderer};
pub use layout::MAX_BINS;
