//! Tracing setup for the collector binary.
//!
//! stdout carries only what a user asked for: the bordered report, the
//! `list` output, `customer added`/`review added`/`exported`/`seeded`
//! confirmations, and menu prompts. It can be piped or diffed.
//!
//! stderr carries the rest: `tracing` events from store loads and saves and
//! repository mutations (filtered by `RUST_LOG`), plus the one-line error
//! printed before a non-zero exit.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset or unparsable: store warnings only.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=collector=debug collector add-customer "Ada" ada@example.com Watch
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
