//! Driving Ports (API - Inbound)
//!
//! What the bus integration calls for every delivered event.

use crate::domain::DispatchOutcome;
use crate::error::DispatchResult;
use netif_types::Event;

/// Lifecycle event dispatch API
pub trait EventDispatchApi: Send + Sync {
    /// Run the default handler for an event and return what it derived,
    /// without sending anything.
    ///
    /// `None` is rejected as an invalid event.
    fn route(&self, event: Option<&Event>) -> DispatchResult<DispatchOutcome>;

    /// Run the default handler and inject any derived event onto the bus.
    ///
    /// A failed injection is logged and does not fail this call.
    fn process(&self, event: Option<&Event>) -> DispatchResult<()>;
}
