//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name for the startup log line
    pub service_name: String,

    /// Global log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Level for the lifecycle controller's `event` target
    pub event_log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "netif".to_string(),
            log_level: "info".to_string(),
            event_log_level: "debug".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NETIF_SERVICE_NAME`: Service name (default: netif)
    /// - `NETIF_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `NETIF_EVENT_LOG_LEVEL`: Lifecycle event level (default: debug)
    /// - `NETIF_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            service_name: lookup("NETIF_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("NETIF_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            event_log_level: lookup("NETIF_EVENT_LOG_LEVEL").unwrap_or(defaults.event_log_level),

            json_logs: lookup("NETIF_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// `EnvFilter` directive: the global level plus an `event=` override.
    pub fn filter_directive(&self) -> String {
        format!("{},event={}", self.log_level, self.event_log_level)
    }
}
