//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::{DEFAULT_LOG_FILTER, ENV_LOG_FILTER};

static INIT: Once = Once::new();

/// Initialize the carenote tracing/logging system.
///
/// Reads the `CARENOTE_LOG` environment variable for per-module log levels.
/// Format: `CARENOTE_LOG=carenote_consolidation=debug,carenote_text=warn`
///
/// Falls back to `carenote=info` if `CARENOTE_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
