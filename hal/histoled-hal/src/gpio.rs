//! GPIO pin abstractions
//!
//! The display only drives control lines, so there is no input side and no
//! readback of the driven level.

/// Digital output pin
///
/// Setting a level is infallible at this layer; adapters over fallible
/// HALs discard the error (see [`crate::Compat`]).
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }
}
