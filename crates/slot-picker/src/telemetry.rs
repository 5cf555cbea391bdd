//! Opt-in log output for hosts embedding the picker.
//!
//! The engine only emits `tracing` events under the `slot_picker` target.
//! Nothing is printed until a subscriber is installed, either by the host or
//! through [`init_tracing`] with the `telemetry` feature enabled.

/// Filter used when `RUST_LOG` is unset: navigation and merge summaries from
/// the picker, warnings from everything else.
pub const DEFAULT_FILTER: &str = "warn,slot_picker=debug";

/// Install a subscriber using `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or the host already
/// installed a global subscriber.
#[must_use]
pub fn init_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_tracing`], with the fallback filter supplied by the caller.
/// `RUST_LOG` still wins when it is set and valid.
#[must_use]
pub fn init_tracing_with(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(fallback, "slot picker log output enabled");
        }
        installed
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
