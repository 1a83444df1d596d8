//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Nothing is
/// installed unless `WARAY_LOG` (or `RUST_LOG`) is set, e.g.
/// `WARAY_LOG=waray_eval=debug` to see function calls as a tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("WARAY_LOG").or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(HierarchicalLayer::new(2).with_targets(true))
                .try_init();
        }
    });
}
