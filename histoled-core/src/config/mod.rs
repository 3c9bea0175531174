//! Configuration types
//!
//! Board-agnostic configuration structures. Defaults reproduce the
//! standard panel setup; the optional `serde` feature lets a host persist
//! or ship them.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
