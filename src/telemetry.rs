//! Tracing setup helpers for applications embedding `motionscope`.
//!
//! Nothing here runs implicitly. Hosts that already own a `tracing`
//! subscriber should skip this module entirely; the helpers exist for demos
//! and quick debugging sessions.

/// Installs a compact stderr subscriber honoring `RUST_LOG`.
///
/// Falls back to the `motionscope=info` directive when `RUST_LOG` is unset.
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("motionscope=info")
}

/// Same as [`init_default_tracing`] with an explicit fallback filter.
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directives));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
