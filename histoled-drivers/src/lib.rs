//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in histoled-core:
//!
//! - SSD1331 96x64 color OLED (SPI command mode)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ssd1331;
