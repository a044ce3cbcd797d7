//! Tracing subscriber setup for binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "WAYPOINT_LOG";

static INIT: Once = Once::new();

/// Install a stderr `fmt` subscriber filtered by `WAYPOINT_LOG`.
///
/// Format: `WAYPOINT_LOG=waypoint_search=trace,waypoint_harness=info`.
/// Falls back to `warn` if the variable is unset or invalid. Output goes to
/// stderr so stdout stays machine-readable. Idempotent; if another global
/// subscriber is already installed, that one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // Ignore the error: it only means a subscriber was set elsewhere.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
