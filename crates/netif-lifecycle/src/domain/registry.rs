//! Dispatch Registry
//!
//! A fixed table mapping every [`EventKind`] to an optional default handler.
//! Entry `i` must describe the kind with ordinal `i`; this is checked when a
//! table is built and again on every route.

use crate::domain::{access_point, station};
use crate::error::{DispatchResult, InvalidEvent};
use crate::ports::outbound::{NetworkAdapter, WifiDriver};
use crate::LOG_TARGET;
use netif_types::{Event, EventKind};
use std::fmt;
use tracing::{debug, error, trace};

/// Collaborators a handler may call.
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub driver: &'a dyn WifiDriver,
    pub adapter: &'a dyn NetworkAdapter,
}

impl<'a> HandlerContext<'a> {
    pub fn new(driver: &'a dyn WifiDriver, adapter: &'a dyn NetworkAdapter) -> Self {
        Self { driver, adapter }
    }
}

/// A default handler: one synchronous state-transition step.
///
/// Returns the derived event to inject, if any.
pub type HandlerFn = fn(&HandlerContext<'_>, &Event) -> DispatchResult<Option<Event>>;

/// One row of the dispatch table.
#[derive(Clone, Copy)]
pub struct DispatchEntry {
    pub kind: EventKind,
    pub handler: Option<HandlerFn>,
}

impl DispatchEntry {
    /// An entry with a default handler.
    #[must_use]
    pub const fn new(kind: EventKind, handler: HandlerFn) -> Self {
        Self {
            kind,
            handler: Some(handler),
        }
    }

    /// An entry for a kind that is only observed, never acted on.
    #[must_use]
    pub const fn passive(kind: EventKind) -> Self {
        Self {
            kind,
            handler: None,
        }
    }
}

impl fmt::Debug for DispatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchEntry")
            .field("kind", &self.kind)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Result of routing one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Whether a default handler ran.
    pub handled: bool,
    /// Event the handler asked to have injected.
    pub derived: Option<Event>,
}

static DEFAULT_TABLE: [DispatchEntry; EventKind::COUNT] = [
    DispatchEntry::passive(EventKind::WifiReady),
    DispatchEntry::passive(EventKind::ScanDone),
    DispatchEntry::new(EventKind::StaStart, station::on_start),
    DispatchEntry::new(EventKind::StaStop, station::on_stop),
    DispatchEntry::new(EventKind::StaConnected, station::on_connected),
    DispatchEntry::new(EventKind::StaDisconnected, station::on_disconnected),
    DispatchEntry::passive(EventKind::StaAuthModeChange),
    DispatchEntry::new(EventKind::StaGotIp, station::on_got_ip),
    DispatchEntry::passive(EventKind::StaWpsSuccess),
    DispatchEntry::passive(EventKind::StaWpsFailed),
    DispatchEntry::passive(EventKind::StaWpsTimeout),
    DispatchEntry::passive(EventKind::StaWpsPin),
    DispatchEntry::new(EventKind::ApStart, access_point::on_start),
    DispatchEntry::new(EventKind::ApStop, access_point::on_stop),
    DispatchEntry::passive(EventKind::ApStaConnected),
    DispatchEntry::passive(EventKind::ApStaDisconnected),
    DispatchEntry::passive(EventKind::ApProbeRequestReceived),
];

/// Immutable event-kind → default-handler table.
///
/// Built once and shared by reference; holds no mutable state.
#[derive(Debug, Clone)]
pub struct DispatchRegistry {
    table: [DispatchEntry; EventKind::COUNT],
}

impl DispatchRegistry {
    /// The default handler set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: DEFAULT_TABLE,
        }
    }

    /// Build a registry from an explicit table, rejecting misordered rows.
    pub fn with_table(table: [DispatchEntry; EventKind::COUNT]) -> DispatchResult<Self> {
        for (index, entry) in table.iter().enumerate() {
            if entry.kind.ordinal() != index {
                let expected = EventKind::ALL[index];
                error!(
                    target: LOG_TARGET,
                    index,
                    entry = %entry.kind,
                    "dispatch table out of order"
                );
                return Err(InvalidEvent::TableMismatch {
                    entry: entry.kind,
                    kind: expected,
                }
                .into());
            }
        }
        Ok(Self { table })
    }

    #[cfg(test)]
    pub(crate) fn with_table_unchecked(table: [DispatchEntry; EventKind::COUNT]) -> Self {
        Self { table }
    }

    /// All rows, in ordinal order.
    #[must_use]
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.table
    }

    /// The default handler registered for a kind.
    #[must_use]
    pub fn handler_for(&self, kind: EventKind) -> Option<HandlerFn> {
        self.table.get(kind.ordinal()).and_then(|entry| entry.handler)
    }

    /// Route one event to its default handler.
    ///
    /// Kinds without a handler succeed with no side effects. Errors from
    /// the handler are returned as-is; nothing is retried.
    pub fn route(
        &self,
        event: Option<&Event>,
        ctx: &HandlerContext<'_>,
    ) -> DispatchResult<DispatchOutcome> {
        let Some(event) = event else {
            error!(target: LOG_TARGET, "event is null");
            return Err(InvalidEvent::Absent.into());
        };

        debug!(target: LOG_TARGET, "{event}");

        // Every ordinal is below `EventKind::COUNT`, the table length.
        let entry = &self.table[event.kind.ordinal()];

        if entry.kind != event.kind {
            error!(
                target: LOG_TARGET,
                entry = %entry.kind,
                kind = %event.kind,
                "mismatch or invalid event"
            );
            return Err(InvalidEvent::TableMismatch {
                entry: entry.kind,
                kind: event.kind,
            }
            .into());
        }

        let Some(handler) = entry.handler else {
            return Ok(DispatchOutcome::default());
        };

        trace!(target: LOG_TARGET, kind = %event.kind, "enter default handler");
        let derived = handler(ctx, event)?;
        trace!(target: LOG_TARGET, kind = %event.kind, "exit default handler");

        Ok(DispatchOutcome {
            handled: true,
            derived,
        })
    }
}

impl Default for DispatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
