//! Diagnostic logging setup.
//!
//! Stdout carries only the JSON document, so the subscriber always writes to
//! stderr. The filter comes from `CAMCAPS_LOG` and defaults to `warn`.

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
