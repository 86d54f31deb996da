//! Telemetry setup
//!
//! Structured logging via tracing, filtered by verbosity or `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a default filter directive
#[must_use]
pub fn log_filter_from_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the verbosity-derived filter. Calling
/// this more than once is an error in the underlying registry, so it should
/// happen exactly once at startup.
pub fn init_telemetry(verbosity: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
