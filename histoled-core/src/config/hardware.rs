//! Hardware timing and error-policy configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a multi-byte command sequence does when one byte fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FailurePolicy {
    /// Stop at the first failed byte and report it
    #[default]
    AbortOnError,
    /// Send the whole sequence anyway, then report the first failure
    Continue,
}

/// Command framing timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransportConfig {
    /// Hold time with chip-select high before asserting it (µs)
    pub cs_setup_delay_us: u32,
    /// Upper bound on a single byte transfer (µs)
    pub byte_timeout_us: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            cs_setup_delay_us: 10,
            byte_timeout_us: 1_000,
        }
    }
}

/// Display controller bring-up configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Delay after each reset edge (ms)
    pub reset_delay_ms: u32,
    /// How long the red "ready" screen stays up (ms)
    pub ready_hold_ms: u32,
    /// Error policy for the init sequence
    pub init_policy: FailurePolicy,
    /// Per-byte framing timing
    pub transport: TransportConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 100,
            ready_hold_ms: 1_000,
            init_policy: FailurePolicy::AbortOnError,
            transport: TransportConfig::default(),
        }
    }
}
