//! Adapters Layer
//!
//! - `event_loop` - delivers bus events to the service and a user handler
//! - `mock` - recording driver, adapter and publisher for tests

pub mod event_loop;
pub mod mock;

pub use event_loop::{EventLoop, EventLoopConfig, UserHandler};
pub use mock::{Call, CallLog, MockNetworkAdapter, MockPublisher, MockWifiDriver};
