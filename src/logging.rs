//! Structured logging via the `tracing` crate.
//!
//! The filter comes from the `FOCULAR_LOG` environment variable when set,
//! falling back to the directive passed by the caller.

use crate::error::UiError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable overriding the log filter.
pub const LOG_ENV_VAR: &str = "FOCULAR_LOG";

/// Install the global subscriber at the default `info` level.
pub fn init() -> Result<(), UiError> {
    init_with_filter("info")
}

/// Install the global subscriber with an explicit fallback filter directive.
pub fn init_with_filter(fallback: &str) -> Result<(), UiError> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|e| UiError::Logging(format!("Invalid log filter: {e}")))?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_target(true),
        )
        .try_init()
        .map_err(|e| UiError::Logging(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter_directives() {
        std::env::remove_var(LOG_ENV_VAR);
        let result = init_with_filter("not a [valid directive");
        assert!(matches!(result, Err(UiError::Logging(_))));
    }
}
