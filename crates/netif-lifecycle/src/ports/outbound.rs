//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The controller never owns interface state. MAC addresses, link state and
//! receive paths belong to the driver; IP configuration and the DHCP client
//! belong to the network adapter. Handlers only sequence calls into these
//! two traits.

use crate::error::CollaboratorError;
use netif_types::{DhcpStatus, IpInfo, MacAddress, Role};
use std::sync::Arc;

/// Function the driver calls to hand a received frame to the IP stack.
pub type ReceiveCallback = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// WiFi driver interface
pub trait WifiDriver: Send + Sync {
    /// Hardware address of the given interface.
    fn get_mac(&self, role: Role) -> Result<MacAddress, CollaboratorError>;

    /// Install (`Some`) or remove (`None`) the receive path for an interface.
    fn register_receive_callback(
        &self,
        role: Role,
        callback: Option<ReceiveCallback>,
    ) -> Result<(), CollaboratorError>;

    /// Tell the driver which address the station now uses for outbound traffic.
    fn notify_station_ip(&self, ip_info: &IpInfo) -> Result<(), CollaboratorError>;
}

/// Network adapter (IP stack) interface
pub trait NetworkAdapter: Send + Sync {
    /// Current, possibly stale, IP configuration of an interface.
    fn get_ip_info(&self, role: Role) -> Result<IpInfo, CollaboratorError>;

    /// Create the interface with the given hardware address and IP configuration.
    fn start(&self, role: Role, mac: MacAddress, ip_info: &IpInfo)
        -> Result<(), CollaboratorError>;

    /// Tear the interface down completely.
    fn stop(&self, role: Role) -> Result<(), CollaboratorError>;

    /// Mark the interface link as up.
    fn up(&self, role: Role) -> Result<(), CollaboratorError>;

    /// Mark the interface link as down.
    fn down(&self, role: Role) -> Result<(), CollaboratorError>;

    /// State of the interface's DHCP client.
    fn dhcp_status(&self, role: Role) -> Result<DhcpStatus, CollaboratorError>;

    /// Start the DHCP client. The resulting lease is announced by the
    /// adapter itself, not by the controller.
    fn dhcp_start(&self, role: Role) -> Result<(), CollaboratorError>;

    /// The adapter's frame input function for an interface.
    fn input_callback(&self, role: Role) -> ReceiveCallback;
}
