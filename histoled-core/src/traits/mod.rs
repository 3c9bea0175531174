//! Hardware abstraction traits
//!
//! These traits define the interface between the chart logic and the
//! hardware-specific implementations.

pub mod display;
pub mod source;

pub use display::PrimitiveDisplay;
pub use source::MagnitudeSource;
