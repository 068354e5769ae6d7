//! # Netif Telemetry
//!
//! Installs the process-wide `tracing` subscriber.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use netif_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NETIF_LOG_LEVEL` / `RUST_LOG` | `info` | Global level filter |
//! | `NETIF_EVENT_LOG_LEVEL` | `debug` | Level for the `event` target |
//! | `NETIF_JSON_LOGS` | `false` | JSON output |
//! | `NETIF_SERVICE_NAME` | `netif` | Service name in the startup line |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    Init(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and announce the service.
pub fn init_telemetry(config: TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(&config)?;
    tracing::info!(
        service = %config.service_name,
        filter = %config.filter_directive(),
        "telemetry initialized"
    );
    Ok(())
}
