//! Blocking delays

/// Blocking delay provider
///
/// All waits in the display protocol are busy waits; nothing is scheduled.
pub trait Delay {
    /// Wait at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Wait at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
