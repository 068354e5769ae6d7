//! # Netif Types Crate
//!
//! Data model shared by the event bus and the lifecycle controller.
//!
//! ## Contents
//!
//! - **Events**: `EventKind` (dense, stable ordinals), `Event`, `EventPayload`
//! - **Entities**: `Role`, `MacAddress`, `IpInfo`, `DhcpStatus`, `AuthMode`, `Ssid`
//! - **Errors**: `UnknownEventKind`
//!
//! Events are transient values: created by the driver or adapter for one
//! delivery and dropped once handled.

pub mod entities;
pub mod errors;
pub mod events;

pub use entities::*;
pub use errors::*;
pub use events::*;
