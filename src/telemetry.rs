//! Opt-in tracing setup for hosts embedding `hydrochart`.
//!
//! The engine emits `tracing` events on state mutations; nothing is
//! initialized implicitly. Hosts either call [`init_default_tracing`] (with
//! the `telemetry` feature) or install their own subscriber.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, defaulting
/// to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
