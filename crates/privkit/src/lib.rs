//! Top-level facade crate for privkit.
//!
//! Re-exports the error surface and the internal library so users can depend on a single crate.

pub mod core {
    pub use privkit_core::*;
}

pub mod internal {
    pub use privkit_internal::*;
}

pub use privkit_internal::access::validate_internal_access;
pub use privkit_internal::config::get_internal_config;
pub use privkit_internal::obs::{internal_log, MetricsRecorder};
