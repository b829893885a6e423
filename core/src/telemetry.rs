//! Tracing setup
//!
//! The library only emits `tracing` events; the embedding service decides where
//! they go. `init_tracing` is the default wiring for binaries and test harnesses.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "info,stockcart_core=debug";

/// Install a global fmt subscriber filtered by `RUST_LOG` (or `DEFAULT_FILTER`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
