//! # Event Publisher
//!
//! Defines the sending side of the event bus. Both the driver glue and the
//! lifecycle controller (for derived events) publish through this trait.

use crate::events::EventFilter;
use crate::subscriber::{EventStream, Subscription};
use crate::DEFAULT_CHANNEL_CAPACITY;
use netif_types::Event;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Errors from publishing onto the bus.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Nobody is subscribed, so the event would never be delivered.
    #[error("No receivers for event")]
    NoReceivers,

    /// The bus has been shut down.
    #[error("Event bus closed")]
    Closed,

    /// A subscriber still holds `capacity` undelivered events.
    #[error("Event queue full")]
    Full,
}

/// Trait for sending events to the bus.
///
/// Sending only enqueues: the bus decides when, and on which task, the
/// event is delivered.
pub trait EventPublisher: Send + Sync {
    /// Send an event for ordinary delivery.
    fn send(&self, event: Event) -> Result<(), BusError>;

    /// Total number of send attempts.
    fn events_published(&self) -> u64;
}

/// In-memory implementation of the event bus.
///
/// Uses `tokio::sync::broadcast`, so every subscriber sees every event in
/// send order. Once the slowest subscriber has `capacity` events pending,
/// further sends fail with [`BusError::Full`] rather than overwriting.
pub struct InMemoryEventBus {
    /// Broadcast sender for events.
    sender: broadcast::Sender<Event>,

    /// Total events published.
    events_published: AtomicU64,

    /// Channel capacity.
    capacity: usize,

    /// Serializes the capacity check with the send.
    send_lock: Mutex<()>,
}

impl InMemoryEventBus {
    /// Create a new in-memory event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new in-memory event bus with specified capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
            capacity,
            send_lock: Mutex::new(()),
        }
    }

    /// Subscribe to events matching a filter.
    ///
    /// Only events sent after this call are received.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, kinds = ?filter.kinds, "New subscription created");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Get a stream of events matching a filter.
    #[must_use]
    pub fn event_stream(&self, filter: EventFilter) -> EventStream {
        EventStream::new(self.sender.subscribe(), filter)
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Get the channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for InMemoryEventBus {
    fn send(&self, event: Event) -> Result<(), BusError> {
        let kind = event.kind;

        // Always increment counter (event was attempted)
        self.events_published.fetch_add(1, Ordering::Relaxed);

        let _guard = self.send_lock.lock();

        // broadcast evicts the oldest entry when full; refuse instead so an
        // accepted event is always delivered.
        if self.sender.len() >= self.capacity {
            warn!(%kind, capacity = self.capacity, "Event refused (queue full)");
            return Err(BusError::Full);
        }

        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(%kind, receivers, "Event sent");
                Ok(())
            }
            Err(_) => {
                warn!(%kind, "Event dropped (no receivers)");
                Err(BusError::NoReceivers)
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}
