//! Tracing setup for host applications.
//!
//! The library itself only emits `tracing` events; hosts that want them on
//! stderr call [`init`] once at startup. Filtering follows the standard
//! `RUST_LOG` environment variable, defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Install a formatted stderr subscriber. Safe to call more than once; the
/// second and later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
