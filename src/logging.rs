//! Diagnostic logging
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. Without one the events are discarded.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "pocket_ledger=warn";
const VERBOSE_DIRECTIVE: &str = "pocket_ledger=debug";

/// Install the global stderr subscriber
///
/// `RUST_LOG` takes precedence when set; otherwise only warnings are shown,
/// or debug events when `verbose` is true. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if verbose {
                VERBOSE_DIRECTIVE
            } else {
                DEFAULT_DIRECTIVE
            })
        });

        // try_init: a test harness may already have installed a subscriber
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("still fine after repeated initialization");
    }
}
