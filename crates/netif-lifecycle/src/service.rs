//! Lifecycle Service
//!
//! Binds the dispatch registry to concrete collaborators and to the bus the
//! derived events are injected into.

use crate::domain::{DispatchOutcome, DispatchRegistry, HandlerContext};
use crate::error::{DispatchError, DispatchResult};
use crate::ports::inbound::EventDispatchApi;
use crate::ports::outbound::{NetworkAdapter, WifiDriver};
use crate::LOG_TARGET;
use netif_bus::EventPublisher;
use netif_types::Event;
use std::sync::Arc;
use tracing::{debug, error};

/// The lifecycle controller.
///
/// Holds no interface state of its own; every call is forwarded to the
/// driver or the adapter.
pub struct LifecycleService<D, A, P> {
    registry: DispatchRegistry,
    driver: Arc<D>,
    adapter: Arc<A>,
    publisher: Arc<P>,
}

impl<D, A, P> LifecycleService<D, A, P>
where
    D: WifiDriver,
    A: NetworkAdapter,
    P: EventPublisher,
{
    /// Create a service with the default handler set.
    pub fn new(driver: Arc<D>, adapter: Arc<A>, publisher: Arc<P>) -> Self {
        Self::with_registry(DispatchRegistry::new(), driver, adapter, publisher)
    }

    pub fn with_registry(
        registry: DispatchRegistry,
        driver: Arc<D>,
        adapter: Arc<A>,
        publisher: Arc<P>,
    ) -> Self {
        Self {
            registry,
            driver,
            adapter,
            publisher,
        }
    }

    pub fn registry(&self) -> &DispatchRegistry {
        &self.registry
    }

    pub fn driver(&self) -> &Arc<D> {
        &self.driver
    }

    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    pub fn publisher(&self) -> &Arc<P> {
        &self.publisher
    }

    /// Send one event onto the bus for ordinary delivery.
    pub fn inject(&self, event: Event) -> DispatchResult<()> {
        let kind = event.kind;
        self.publisher
            .send(event)
            .map_err(|source| DispatchError::InjectionFailed { kind, source })?;
        debug!(target: LOG_TARGET, %kind, "injected derived event");
        Ok(())
    }
}

impl<D, A, P> EventDispatchApi for LifecycleService<D, A, P>
where
    D: WifiDriver,
    A: NetworkAdapter,
    P: EventPublisher,
{
    fn route(&self, event: Option<&Event>) -> DispatchResult<DispatchOutcome> {
        let ctx = HandlerContext::new(self.driver.as_ref(), self.adapter.as_ref());
        self.registry.route(event, &ctx)
    }

    fn process(&self, event: Option<&Event>) -> DispatchResult<()> {
        let outcome = self.route(event)?;

        if let Some(derived) = outcome.derived {
            if let Err(err) = self.inject(derived) {
                error!(target: LOG_TARGET, error = %err, "derived event dropped");
            }
        }

        Ok(())
    }
}
