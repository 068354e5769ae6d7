//! Event Loop Adapter
//!
//! Owns delivery: receives events from the bus one at a time, runs the
//! default handler through the service, then hands the same event to the
//! application's handler.
//!
//! ```text
//! Bus ──recv──→ EventLoop ──process──→ LifecycleService ──send (derived)──→ Bus
//!                   │
//!                   └──────→ user handler
//! ```

use crate::error::DispatchResult;
use crate::ports::inbound::EventDispatchApi;
use crate::LOG_TARGET;
use netif_bus::{EventFilter, InMemoryEventBus, Subscription, DEFAULT_CHANNEL_CAPACITY};
use netif_types::Event;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Application callback invoked after the default handler for every event.
pub type UserHandler = Arc<dyn Fn(&Event) -> anyhow::Result<()> + Send + Sync>;

/// Event loop configuration
#[derive(Clone, Debug)]
pub struct EventLoopConfig {
    /// Events buffered per subscriber before further sends are refused.
    pub queue_capacity: usize,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl EventLoopConfig {
    /// A bus sized for this loop.
    #[must_use]
    pub fn build_bus(&self) -> Arc<InMemoryEventBus> {
        Arc::new(InMemoryEventBus::with_capacity(self.queue_capacity))
    }
}

pub struct EventLoop<S> {
    bus: Arc<InMemoryEventBus>,
    service: Arc<S>,
    user_handler: RwLock<Option<UserHandler>>,
    shutdown_tx: watch::Sender<bool>,
}

impl<S: EventDispatchApi> EventLoop<S> {
    pub fn new(bus: Arc<InMemoryEventBus>, service: Arc<S>) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            bus,
            service,
            user_handler: RwLock::new(None),
            shutdown_tx,
        }
    }

    pub fn bus(&self) -> &Arc<InMemoryEventBus> {
        &self.bus
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Subscribe to every event on the bus. Call before events are sent.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        self.bus.subscribe(EventFilter::all())
    }

    /// Install the application handler, returning the one it replaces.
    pub fn set_user_handler(&self, handler: UserHandler) -> Option<UserHandler> {
        self.user_handler.write().replace(handler)
    }

    pub fn clear_user_handler(&self) -> Option<UserHandler> {
        self.user_handler.write().take()
    }

    /// Deliver one event: default handler first, then the user handler.
    ///
    /// The user handler sees the event whatever the default handler
    /// returned. Returns the default handler's result.
    pub fn process_one(&self, event: &Event) -> DispatchResult<()> {
        let result = self.service.process(Some(event));
        if let Err(err) = &result {
            error!(target: LOG_TARGET, kind = %event.kind, error = %err, "default event handler failed");
        }

        let handler = self.user_handler.read().clone();
        if let Some(handler) = handler {
            if let Err(err) = handler(event) {
                error!(target: LOG_TARGET, kind = %event.kind, error = %err, "user event handler failed");
            }
        }

        result
    }

    /// Deliver events until [`shutdown`](Self::shutdown) is called or the
    /// bus closes.
    pub async fn run(&self, mut subscription: Subscription) {
        let mut shutdown = self.shutdown_tx.subscribe();
        if *shutdown.borrow_and_update() {
            warn!(target: LOG_TARGET, "event loop already shut down");
            return;
        }

        info!(target: LOG_TARGET, "event loop started");
        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => {
                    info!(target: LOG_TARGET, "shutdown signal received");
                    break;
                }
                event = subscription.recv() => match event {
                    Some(event) => {
                        // Already logged; delivery continues.
                        let _ = self.process_one(&event);
                    }
                    None => {
                        info!(target: LOG_TARGET, "event bus closed");
                        break;
                    }
                },
            }
        }
    }

    /// Stop a running (or future) `run`.
    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
    }

    pub fn is_shut_down(&self) -> bool {
        *self.shutdown_tx.borrow()
    }
}
