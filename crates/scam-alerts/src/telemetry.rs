//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the filter is built from
//! `APP_LOG_LEVEL` with hyper's per-connection chatter quieted so the
//! service's own request logs stay readable around the simulated-latency
//! sleeps.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Directives appended after the configured default level. Connection-level
/// noise from the HTTP stack is capped at `warn`.
const QUIET_DEPENDENCIES: &str = "hyper=warn,mio=warn";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("unable to install the tracing subscriber")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn filter_from(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let directives = format!("{},{QUIET_DEPENDENCIES}", config.log_level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
        value: directives,
        source,
    })
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filter_from_configured_level() {
        let config = TelemetryConfig {
            log_level: "debug".to_string(),
        };
        assert!(filter_from(&config).is_ok());
    }

    #[test]
    fn rejects_malformed_level() {
        let config = TelemetryConfig {
            log_level: "debug=".to_string(),
        };
        match filter_from(&config) {
            Err(TelemetryError::Filter { value, .. }) => {
                assert!(value.starts_with("debug="));
            }
            other => panic!("expected a filter error, got {other:?}"),
        }
    }
}
