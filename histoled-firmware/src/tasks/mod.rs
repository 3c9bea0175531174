//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod chart;
pub mod sampler;

pub use chart::{chart_task, Display, FLASH_MS};
pub use sampler::{sampler_task, AdcSource, SamplerConfig};
