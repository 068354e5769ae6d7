//! Subscriber installation.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by [`TelemetryConfig::filter_directive`].
///
/// Fails with [`TelemetryError::Config`] for an unparsable filter and with
/// [`TelemetryError::Init`] if a global subscriber is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.filter_directive())
        .map_err(|e| TelemetryError::Config(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}
