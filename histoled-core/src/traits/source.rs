//! Upstream sample capability
//!
//! Whatever measures the quantity being charted (a current sensor, an ADC
//! channel, a test fixture) is reached only through this trait.

use crate::error::SourceError;

/// Supplies one magnitude sample per call
pub trait MagnitudeSource {
    /// Read the next sample, blocking until it is available
    fn read_magnitude(&mut self) -> Result<u32, SourceError>;
}

impl<T: MagnitudeSource + ?Sized> MagnitudeSource for &mut T {
    fn read_magnitude(&mut self) -> Result<u32, SourceError> {
        (**self).read_magnitude()
    }
}
