//! Error taxonomy
//!
//! Two families matter at runtime: transport failures (the SPI byte did
//! not go out) and precondition violations (the caller broke a contract).
//! [`DisplayError`] wraps both so driver and renderer code can use `?`.

/// The SPI transfer for a command byte failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Transfer did not complete within the per-byte timeout
    Timeout,
    /// Bus reported a failure
    Bus,
}

/// An operation was invoked in a state or with inputs it does not accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PreconditionError {
    /// Drawing before `initialize()` reached the ready state
    NotInitialized,
    /// Magnitude and changed-flag sequences differ in length
    LengthMismatch { magnitudes: usize, changed: usize },
    /// More bins than the column layout provides
    TooManyBins { bins: usize, max: usize },
    /// Nothing to render
    NoBins,
    /// Coordinates outside the panel
    OutOfBounds,
}

/// Errors surfaced by display drivers and renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    Transport(TransportError),
    Precondition(PreconditionError),
}

impl From<TransportError> for DisplayError {
    fn from(e: TransportError) -> Self {
        DisplayError::Transport(e)
    }
}

impl From<PreconditionError> for DisplayError {
    fn from(e: PreconditionError) -> Self {
        DisplayError::Precondition(e)
    }
}

/// Invalid configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Base growth step must be at least one sub-pixel
    ZeroGrowthStep,
    /// Bottom margin leaves no room for bars
    MarginTooLarge,
    /// Bottom margin cannot hold the x-axis, tick pointers and labels
    MarginTooSmall,
    /// Histogram bin width must be non-zero
    ZeroBinWidth,
}

/// A magnitude source could not produce a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceError {
    /// The sensor did not answer
    NotResponding,
    /// The reading was outside the sensor's valid range
    OutOfRange,
}
