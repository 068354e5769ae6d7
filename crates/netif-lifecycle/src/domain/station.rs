//! Station interface handlers.
//!
//! ```text
//! Idle ──start──→ Started ──connected──→ Connected ──got ip──→ HasAddress
//!   ↑                │                        │                    │
//!   └─────stop───────┘                        └───disconnected─────┴──→ Disconnected
//! ```

use crate::domain::{check, HandlerContext};
use crate::error::{DispatchResult, InvalidEvent, Operation};
use crate::LOG_TARGET;
use netif_types::{DhcpStatus, Event, EventKind, Role};
use tracing::{debug, error, info, trace};

const ROLE: Role = Role::Station;

/// Create the station interface from the driver MAC and the adapter's
/// current (possibly stale) IP configuration.
pub(crate) fn on_start(ctx: &HandlerContext<'_>, _event: &Event) -> DispatchResult<Option<Event>> {
    const HANDLER: &str = "sta_start";

    let mac = check(HANDLER, Operation::GetMac, ctx.driver.get_mac(ROLE))?;
    let ip_info = check(HANDLER, Operation::GetIpInfo, ctx.adapter.get_ip_info(ROLE))?;
    check(HANDLER, Operation::Start, ctx.adapter.start(ROLE, mac, &ip_info))?;

    Ok(None)
}

pub(crate) fn on_stop(ctx: &HandlerContext<'_>, _event: &Event) -> DispatchResult<Option<Event>> {
    check("sta_stop", Operation::Stop, ctx.adapter.stop(ROLE))?;
    Ok(None)
}

/// Attach the receive path, raise the link, then settle addressing.
///
/// With an idle DHCP client (`Stopped`) a configured static address is
/// re-announced as a derived `StaGotIp`, so every reconnect reaches the
/// address-acquired point whether the address came from a lease or not.
pub(crate) fn on_connected(
    ctx: &HandlerContext<'_>,
    _event: &Event,
) -> DispatchResult<Option<Event>> {
    const HANDLER: &str = "sta_connected";

    let callback = ctx.adapter.input_callback(ROLE);
    check(
        HANDLER,
        Operation::RegisterReceiveCallback,
        ctx.driver.register_receive_callback(ROLE, Some(callback)),
    )?;
    check(HANDLER, Operation::Up, ctx.adapter.up(ROLE))?;

    let status = check(HANDLER, Operation::DhcpStatus, ctx.adapter.dhcp_status(ROLE))?;
    match status {
        DhcpStatus::Init => {
            check(HANDLER, Operation::DhcpStart, ctx.adapter.dhcp_start(ROLE))?;
            Ok(None)
        }
        DhcpStatus::Stopped => {
            let ip_info = check(HANDLER, Operation::GetIpInfo, ctx.adapter.get_ip_info(ROLE))?;
            if ip_info.is_valid() {
                debug!(target: LOG_TARGET, %ip_info, "re-announcing static ip");
                Ok(Some(Event::sta_got_ip(ip_info)))
            } else {
                error!(target: LOG_TARGET, %ip_info, "invalid static ip");
                Ok(None)
            }
        }
        // A running client announces its own lease.
        DhcpStatus::Started => {
            trace!(target: LOG_TARGET, %status, "no addressing action");
            Ok(None)
        }
    }
}

/// Lower the link before detaching the receive path.
pub(crate) fn on_disconnected(
    ctx: &HandlerContext<'_>,
    _event: &Event,
) -> DispatchResult<Option<Event>> {
    const HANDLER: &str = "sta_disconnected";

    check(HANDLER, Operation::Down, ctx.adapter.down(ROLE))?;
    check(
        HANDLER,
        Operation::RegisterReceiveCallback,
        ctx.driver.register_receive_callback(ROLE, None),
    )?;

    Ok(None)
}

/// Point the driver at the new station address. Never derives an event.
pub(crate) fn on_got_ip(ctx: &HandlerContext<'_>, event: &Event) -> DispatchResult<Option<Event>> {
    let Some(ip_info) = event.ip_info() else {
        error!(target: LOG_TARGET, "sta_got_ip without address payload");
        return Err(InvalidEvent::PayloadMismatch {
            kind: EventKind::StaGotIp,
        }
        .into());
    };

    check(
        "sta_got_ip",
        Operation::NotifyStationIp,
        ctx.driver.notify_station_ip(ip_info),
    )?;

    info!(target: LOG_TARGET, "{ip_info}");

    Ok(None)
}
