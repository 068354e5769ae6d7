//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - event dispatch API for the bus integration
//! - Driven Ports (outbound) - the WiFi driver and the network adapter

pub mod inbound;
pub mod outbound;

pub use inbound::EventDispatchApi;
pub use outbound::{NetworkAdapter, ReceiveCallback, WifiDriver};
