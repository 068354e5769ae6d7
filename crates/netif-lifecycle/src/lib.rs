//! # netif-lifecycle
//!
//! Network interface lifecycle controller for a dual-role WiFi device that
//! runs a station (client) and an access point at the same time.
//!
//! ## Overview
//!
//! Every driver event is routed through a fixed dispatch table. Seven kinds
//! have a default handler that sequences calls into the WiFi driver and the
//! network adapter; the rest are logged and passed through:
//!
//! | Event | Default handler |
//! |-------|-----------------|
//! | StaStart | `get_mac` → `get_ip_info` → `start` |
//! | StaStop | `stop` |
//! | StaConnected | register receive path → `up` → DHCP start or static re-announce |
//! | StaDisconnected | `down` → remove receive path |
//! | StaGotIp | `notify_station_ip` |
//! | ApStart | register receive path → `get_mac` → `get_ip_info` → `start` |
//! | ApStop | remove receive path → `stop` |
//!
//! ## Architecture
//!
//! ```text
//! WiFi driver ──event──→ Bus ──→ EventLoop ──→ LifecycleService ──→ DispatchRegistry
//!                         ↑                          │                     │
//!                         └──── derived StaGotIp ────┘          WifiDriver / NetworkAdapter
//! ```
//!
//! Handlers never send events themselves. A handler returns the event it
//! derives and the service injects it onto the bus, where it is delivered
//! like any other.
//!
//! ## Example
//!
//! ```rust,ignore
//! use netif_lifecycle::{EventLoop, EventLoopConfig, LifecycleService};
//!
//! let bus = EventLoopConfig::default().build_bus();
//! let service = Arc::new(LifecycleService::new(driver, adapter, Arc::clone(&bus)));
//! let event_loop = Arc::new(EventLoop::new(bus, service));
//!
//! let subscription = event_loop.subscribe();
//! tokio::spawn(async move { event_loop.run(subscription).await });
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{EventLoop, EventLoopConfig, UserHandler};
pub use domain::{DispatchEntry, DispatchOutcome, DispatchRegistry, HandlerContext, HandlerFn};
pub use error::{CollaboratorError, DispatchError, DispatchResult, InvalidEvent, Operation};
pub use ports::{EventDispatchApi, NetworkAdapter, ReceiveCallback, WifiDriver};
pub use service::LifecycleService;

/// Tracing target for every lifecycle log line.
pub const LOG_TARGET: &str = "event";
