//! # Lifecycle Events
//!
//! Every event the WiFi driver emits, with the payload each kind carries.
//!
//! `EventKind` ordinals are stable and dense: the dispatch table is indexed
//! by them, so new kinds may only be appended.

use crate::entities::{AuthMode, IpInfo, MacAddress, Role, Ssid};
use crate::errors::UnknownEventKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All lifecycle event kinds, in ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventKind {
    WifiReady = 0,
    ScanDone = 1,
    StaStart = 2,
    StaStop = 3,
    StaConnected = 4,
    StaDisconnected = 5,
    StaAuthModeChange = 6,
    StaGotIp = 7,
    StaWpsSuccess = 8,
    StaWpsFailed = 9,
    StaWpsTimeout = 10,
    StaWpsPin = 11,
    ApStart = 12,
    ApStop = 13,
    ApStaConnected = 14,
    ApStaDisconnected = 15,
    ApProbeRequestReceived = 16,
}

impl EventKind {
    /// Number of event kinds.
    pub const COUNT: usize = 17;

    /// Every kind, indexed by ordinal.
    pub const ALL: [EventKind; EventKind::COUNT] = [
        EventKind::WifiReady,
        EventKind::ScanDone,
        EventKind::StaStart,
        EventKind::StaStop,
        EventKind::StaConnected,
        EventKind::StaDisconnected,
        EventKind::StaAuthModeChange,
        EventKind::StaGotIp,
        EventKind::StaWpsSuccess,
        EventKind::StaWpsFailed,
        EventKind::StaWpsTimeout,
        EventKind::StaWpsPin,
        EventKind::ApStart,
        EventKind::ApStop,
        EventKind::ApStaConnected,
        EventKind::ApStaDisconnected,
        EventKind::ApProbeRequestReceived,
    ];

    /// Table index of this kind.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Look a kind up by ordinal.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// The interface this kind concerns, if any.
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            EventKind::WifiReady | EventKind::ScanDone => None,
            EventKind::StaStart
            | EventKind::StaStop
            | EventKind::StaConnected
            | EventKind::StaDisconnected
            | EventKind::StaAuthModeChange
            | EventKind::StaGotIp
            | EventKind::StaWpsSuccess
            | EventKind::StaWpsFailed
            | EventKind::StaWpsTimeout
            | EventKind::StaWpsPin => Some(Role::Station),
            EventKind::ApStart
            | EventKind::ApStop
            | EventKind::ApStaConnected
            | EventKind::ApStaDisconnected
            | EventKind::ApProbeRequestReceived => Some(Role::AccessPoint),
        }
    }

    /// Stable snake_case name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::WifiReady => "wifi_ready",
            EventKind::ScanDone => "scan_done",
            EventKind::StaStart => "sta_start",
            EventKind::StaStop => "sta_stop",
            EventKind::StaConnected => "sta_connected",
            EventKind::StaDisconnected => "sta_disconnected",
            EventKind::StaAuthModeChange => "sta_authmode_change",
            EventKind::StaGotIp => "sta_got_ip",
            EventKind::StaWpsSuccess => "sta_wps_success",
            EventKind::StaWpsFailed => "sta_wps_failed",
            EventKind::StaWpsTimeout => "sta_wps_timeout",
            EventKind::StaWpsPin => "sta_wps_pin",
            EventKind::ApStart => "ap_start",
            EventKind::ApStop => "ap_stop",
            EventKind::ApStaConnected => "ap_sta_connected",
            EventKind::ApStaDisconnected => "ap_sta_disconnected",
            EventKind::ApProbeRequestReceived => "ap_probe_request_received",
        }
    }
}

impl TryFrom<u32> for EventKind {
    type Error = UnknownEventKind;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Self::from_ordinal)
            .ok_or(UnknownEventKind(value))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind event data.
///
/// Only `GotIp` is read by the lifecycle handlers; the other variants exist
/// for diagnostics and for user handlers outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventPayload {
    #[default]
    None,
    ScanDone {
        status: u32,
        number: u8,
    },
    StaConnected {
        ssid: Ssid,
        bssid: MacAddress,
        channel: u8,
        authmode: AuthMode,
    },
    StaDisconnected {
        ssid: Ssid,
        bssid: MacAddress,
        reason: u8,
    },
    StaAuthModeChange {
        old_mode: AuthMode,
        new_mode: AuthMode,
    },
    GotIp {
        ip_info: IpInfo,
    },
    WpsPin {
        pin_code: [u8; 8],
    },
    ApStaConnected {
        mac: MacAddress,
        aid: u8,
    },
    ApStaDisconnected {
        mac: MacAddress,
        aid: u8,
    },
    ApProbeRequest {
        rssi: i32,
        mac: MacAddress,
    },
}

/// A single lifecycle event as delivered by the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub payload: EventPayload,
}

impl Event {
    /// An event with no payload.
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            payload: EventPayload::None,
        }
    }

    /// An event with an explicit payload. Kind and payload are not checked
    /// against each other here; handlers reject mismatches.
    #[must_use]
    pub const fn with_payload(kind: EventKind, payload: EventPayload) -> Self {
        Self { kind, payload }
    }

    #[must_use]
    pub const fn scan_done(status: u32, number: u8) -> Self {
        Self::with_payload(EventKind::ScanDone, EventPayload::ScanDone { status, number })
    }

    #[must_use]
    pub const fn sta_connected(
        ssid: Ssid,
        bssid: MacAddress,
        channel: u8,
        authmode: AuthMode,
    ) -> Self {
        Self::with_payload(
            EventKind::StaConnected,
            EventPayload::StaConnected {
                ssid,
                bssid,
                channel,
                authmode,
            },
        )
    }

    #[must_use]
    pub const fn sta_disconnected(ssid: Ssid, bssid: MacAddress, reason: u8) -> Self {
        Self::with_payload(
            EventKind::StaDisconnected,
            EventPayload::StaDisconnected {
                ssid,
                bssid,
                reason,
            },
        )
    }

    #[must_use]
    pub const fn sta_authmode_change(old_mode: AuthMode, new_mode: AuthMode) -> Self {
        Self::with_payload(
            EventKind::StaAuthModeChange,
            EventPayload::StaAuthModeChange { old_mode, new_mode },
        )
    }

    /// The address-acquired event, from a DHCP lease or a static address.
    #[must_use]
    pub const fn sta_got_ip(ip_info: IpInfo) -> Self {
        Self::with_payload(EventKind::StaGotIp, EventPayload::GotIp { ip_info })
    }

    #[must_use]
    pub const fn sta_wps_pin(pin_code: [u8; 8]) -> Self {
        Self::with_payload(EventKind::StaWpsPin, EventPayload::WpsPin { pin_code })
    }

    #[must_use]
    pub const fn ap_sta_connected(mac: MacAddress, aid: u8) -> Self {
        Self::with_payload(
            EventKind::ApStaConnected,
            EventPayload::ApStaConnected { mac, aid },
        )
    }

    #[must_use]
    pub const fn ap_sta_disconnected(mac: MacAddress, aid: u8) -> Self {
        Self::with_payload(
            EventKind::ApStaDisconnected,
            EventPayload::ApStaDisconnected { mac, aid },
        )
    }

    #[must_use]
    pub const fn ap_probe_request(rssi: i32, mac: MacAddress) -> Self {
        Self::with_payload(
            EventKind::ApProbeRequestReceived,
            EventPayload::ApProbeRequest { rssi, mac },
        )
    }

    /// The address carried by a `GotIp` payload.
    #[must_use]
    pub fn ip_info(&self) -> Option<&IpInfo> {
        match &self.payload {
            EventPayload::GotIp { ip_info } => Some(ip_info),
            _ => None,
        }
    }
}

/// One-line diagnostic summary.
///
/// Fields the payload does not carry are simply left out, so a kind paired
/// with the wrong payload still prints its name.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match &self.payload {
            EventPayload::None => Ok(()),
            EventPayload::ScanDone { status, number } => {
                write!(f, ", status: {status}, number: {number}")
            }
            EventPayload::StaConnected {
                ssid,
                bssid,
                channel,
                authmode,
            } => write!(
                f,
                ", ssid: {ssid}, ssid_len: {}, bssid: {bssid}, channel: {channel}, authmode: {authmode}",
                ssid.reported_len()
            ),
            EventPayload::StaDisconnected {
                ssid,
                bssid,
                reason,
            } => write!(
                f,
                ", ssid: {ssid}, ssid_len: {}, bssid: {bssid}, reason: {reason}",
                ssid.reported_len()
            ),
            EventPayload::StaAuthModeChange { old_mode, new_mode } => {
                write!(f, ", old_mode: {old_mode}, new_mode: {new_mode}")
            }
            EventPayload::GotIp { ip_info } => write!(f, ", {ip_info}"),
            EventPayload::WpsPin { pin_code } => {
                write!(f, ", pin: {}", String::from_utf8_lossy(pin_code))
            }
            EventPayload::ApStaConnected { mac, aid }
            | EventPayload::ApStaDisconnected { mac, aid } => {
                write!(f, ", mac: {mac}, aid: {aid}")
            }
            EventPayload::ApProbeRequest { rssi, mac } => {
                write!(f, ", rssi: {rssi}, mac: {mac}")
            }
        }
    }
}
