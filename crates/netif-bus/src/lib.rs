//! # Netif Bus - Event Bus for WiFi Lifecycle Events
//!
//! Carries driver events to the interface lifecycle controller, and carries
//! events the controller derives (such as a re-announced static address)
//! back through the same path.
//!
//! ```text
//! ┌──────────────┐   send()    ┌──────────────┐  subscribe()  ┌──────────────┐
//! │ WiFi driver  │ ──────────→ │  Event Bus   │ ────────────→ │  Event loop  │
//! └──────────────┘             └──────────────┘               └──────┬───────┘
//!                                     ↑        derived events        │
//!                                     └──────────────────────────────┘
//! ```
//!
//! Sending never runs a handler directly: delivery happens when a
//! subscriber receives the event.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic};
pub use publisher::{BusError, EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Default number of events buffered per subscriber.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
