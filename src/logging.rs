//! Diagnostic logging to stderr.
//!
//! Change lines are not logged here; they go to stdout through the monitor.
//! Set `RUST_LOG` to override the level chosen from `--verbose`. Warnings and
//! errors from this crate (source failures) are always emitted.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{
    filter::{FilterExt, Targets},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

const CRATE_TARGET: &str = "valuewatch";

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{CRATE_TARGET}={default_level}")));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .with_filter(filter.or(warning_floor()));

    // A subscriber may already be installed (tests), which is fine.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

/// Minimum level for this crate no matter what `RUST_LOG` says.
fn warning_floor() -> Targets {
    Targets::new().with_target(CRATE_TARGET, Level::WARN)
}
