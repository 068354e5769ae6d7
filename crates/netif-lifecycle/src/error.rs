//! Error types for the lifecycle controller
//!
//! Every collaborator call is named by an [`Operation`] so a failure can be
//! traced to the exact step of a handler sequence that aborted.

use netif_bus::BusError;
use netif_types::{EventKind, UnknownEventKind};
use std::fmt;
use thiserror::Error;

/// A driver or adapter call, as named in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetMac,
    RegisterReceiveCallback,
    NotifyStationIp,
    GetIpInfo,
    Start,
    Stop,
    Up,
    Down,
    DhcpStatus,
    DhcpStart,
}

impl Operation {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetMac => "get_mac",
            Operation::RegisterReceiveCallback => "register_receive_callback",
            Operation::NotifyStationIp => "notify_station_ip",
            Operation::GetIpInfo => "get_ip_info",
            Operation::Start => "start",
            Operation::Stop => "stop",
            Operation::Up => "up",
            Operation::Down => "down",
            Operation::DhcpStatus => "dhcp_status",
            Operation::DhcpStart => "dhcp_start",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-success result from a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("WiFi driver returned error code {code}")]
    Driver { code: i32 },

    #[error("Network adapter returned error code {code}")]
    Adapter { code: i32 },
}

/// Why an event was rejected before any handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidEvent {
    #[error("event is absent")]
    Absent,

    #[error("unknown event kind {0}")]
    UnknownKind(u32),

    #[error("dispatch table entry {entry} does not match event kind {kind}")]
    TableMismatch { entry: EventKind, kind: EventKind },

    #[error("payload does not match event kind {kind}")]
    PayloadMismatch { kind: EventKind },
}

/// Dispatch errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Integration error: never retried.
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] InvalidEvent),

    /// A driver or adapter call failed; later steps of the handler did not run.
    #[error("{operation} failed: {source}")]
    CollaboratorCallFailed {
        operation: Operation,
        #[source]
        source: CollaboratorError,
    },

    /// Sending a derived event onto the bus failed.
    #[error("Failed to inject {kind} event: {source}")]
    InjectionFailed {
        kind: EventKind,
        #[source]
        source: BusError,
    },
}

impl DispatchError {
    /// True for `InvalidEvent` errors.
    #[must_use]
    pub fn is_invalid_event(&self) -> bool {
        matches!(self, DispatchError::InvalidEvent(_))
    }

    /// The collaborator call that failed, if this is a call failure.
    #[must_use]
    pub fn failed_operation(&self) -> Option<Operation> {
        match self {
            DispatchError::CollaboratorCallFailed { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

impl From<UnknownEventKind> for DispatchError {
    fn from(err: UnknownEventKind) -> Self {
        DispatchError::InvalidEvent(InvalidEvent::UnknownKind(err.0))
    }
}

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;
