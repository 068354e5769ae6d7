//! # Core Entities
//!
//! Interface roles, hardware and IPv4 addressing, and DHCP client state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum SSID length in bytes (IEEE 802.11).
pub const MAX_SSID_LEN: usize = 32;

/// Which WiFi interface an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The device joins another access point as a client.
    Station,
    /// The device is the access point other stations join.
    AccessPoint,
}

impl Role {
    /// Both roles, station first.
    pub const ALL: [Role; 2] = [Role::Station, Role::AccessPoint];

    /// Short interface tag used in log lines.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Station => "sta",
            Role::AccessPoint => "ap",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 6-byte IEEE 802 hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Create a MAC address from raw octets.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Raw octets.
    #[must_use]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// IPv4 configuration of one interface.
///
/// A value is *valid* when none of the three addresses is the unspecified
/// address `0.0.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpInfo {
    /// Interface address.
    pub address: Ipv4Addr,
    /// Subnet mask.
    pub netmask: Ipv4Addr,
    /// Default gateway.
    pub gateway: Ipv4Addr,
}

impl IpInfo {
    /// All three fields set to `0.0.0.0`.
    pub const UNSPECIFIED: IpInfo = IpInfo {
        address: Ipv4Addr::UNSPECIFIED,
        netmask: Ipv4Addr::UNSPECIFIED,
        gateway: Ipv4Addr::UNSPECIFIED,
    };

    /// Create a new IP configuration.
    #[must_use]
    pub const fn new(address: Ipv4Addr, netmask: Ipv4Addr, gateway: Ipv4Addr) -> Self {
        Self {
            address,
            netmask,
            gateway,
        }
    }

    /// True when address, netmask and gateway are all assigned.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !(self.address.is_unspecified()
            || self.netmask.is_unspecified()
            || self.gateway.is_unspecified())
    }
}

impl Default for IpInfo {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl fmt::Display for IpInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip: {}, mask: {}, gw: {}",
            self.address, self.netmask, self.gateway
        )
    }
}

/// State of the per-interface DHCP client, owned by the network adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DhcpStatus {
    /// No address claimed yet; the client has never run.
    Init,
    /// The client is running and holds or is negotiating a lease.
    Started,
    /// The client is intentionally idle; the address is static or retained.
    Stopped,
}

impl fmt::Display for DhcpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DhcpStatus::Init => "init",
            DhcpStatus::Started => "started",
            DhcpStatus::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Authentication mode reported by the driver. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthMode {
    #[default]
    Open,
    Wep,
    WpaPsk,
    Wpa2Psk,
    WpaWpa2Psk,
    Wpa2Enterprise,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthMode::Open => "open",
            AuthMode::Wep => "wep",
            AuthMode::WpaPsk => "wpa-psk",
            AuthMode::Wpa2Psk => "wpa2-psk",
            AuthMode::WpaWpa2Psk => "wpa/wpa2-psk",
            AuthMode::Wpa2Enterprise => "wpa2-enterprise",
        };
        f.write_str(name)
    }
}

/// Raw SSID bytes as delivered by the driver.
///
/// The length field comes from the driver and is not trusted: it is clamped
/// to [`MAX_SSID_LEN`] whenever the bytes are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ssid {
    bytes: [u8; MAX_SSID_LEN],
    len: u8,
}

impl Ssid {
    /// Build an SSID from a byte slice, truncating to 32 bytes.
    #[must_use]
    pub fn new(raw: &[u8]) -> Self {
        let len = raw.len().min(MAX_SSID_LEN);
        let mut bytes = [0u8; MAX_SSID_LEN];
        bytes[..len].copy_from_slice(&raw[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Build an SSID from a driver buffer and its reported length.
    #[must_use]
    pub const fn from_raw(bytes: [u8; MAX_SSID_LEN], len: u8) -> Self {
        Self { bytes, len }
    }

    /// Reported length, as delivered.
    #[must_use]
    pub const fn reported_len(&self) -> u8 {
        self.len
    }

    /// The SSID bytes within the clamped length.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let len = usize::from(self.len).min(MAX_SSID_LEN);
        &self.bytes[..len]
    }
}

impl From<&str> for Ssid {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
