//! Opt-in tracing setup for hosts embedding the trend view.
//!
//! The compiler and the view only emit `tracing` events. Hosts either wire
//! their own subscriber or call one of the helpers below with the
//! `telemetry` feature enabled.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACE_FILTER: &str = "calendar_trend=info";

/// Installs a compact `tracing-subscriber` honoring `RUST_LOG`, falling back
/// to [`DEFAULT_TRACE_FILTER`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACE_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact subscriber with an explicit filter directive such as
/// `"calendar_trend=trace"`. `RUST_LOG` is ignored.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return install(tracing_subscriber::EnvFilter::new(directives));
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
