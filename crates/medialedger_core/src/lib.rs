//! # medialedger_core
//!
//! Ledger-backed metadata registry for media assets.
//!
//! A caller registers a media record (name, size, summary, category labels),
//! later amends it, transfers ownership of it, or deletes it; every mutation
//! is gated by current-owner identity. The registry is built from small
//! [`tower::Service`] components sharing in-memory maps, composed behind a
//! single caller-facing service. See the [`registry`] module for the full
//! architecture.

pub mod registry;

/// Tracing initialization for the registry, compiled in behind the
/// `medialedger_tracing` feature.
#[cfg(feature = "medialedger_tracing")]
pub mod medialedger_tracing {
    use std::sync::Once;

    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    /// Installs a global fmt subscriber honoring `RUST_LOG`, defaulting to
    /// `info`. Safe to call from multiple tests; only the first call wins.
    pub fn init() {
        INIT.call_once(|| {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
        });
    }
}

#[cfg(test)]
mod tests;
