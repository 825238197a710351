//! Observability: console log lines, the metrics table, and tracing setup.

pub mod log;
pub mod metrics;

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

pub use self::log::{format_internal_log, internal_log, internal_log_at, write_internal_log};
pub use self::metrics::MetricsRecorder;

/// Install the tracing subscriber. Honors `RUST_LOG`, defaults to `info`.
///
/// Diagnostics go to stderr so stdout only carries `[INTERNAL-...]` lines and
/// rendered metrics. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
