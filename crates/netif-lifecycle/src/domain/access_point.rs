//! Access point interface handlers.
//!
//! `Idle → Started → Idle`. Stations joining or leaving the AP pass through
//! without a default handler.

use crate::domain::{check, HandlerContext};
use crate::error::{DispatchResult, Operation};
use netif_types::{Event, Role};

const ROLE: Role = Role::AccessPoint;

/// Attach the receive path first, then create the interface.
pub(crate) fn on_start(ctx: &HandlerContext<'_>, _event: &Event) -> DispatchResult<Option<Event>> {
    const HANDLER: &str = "ap_start";

    let callback = ctx.adapter.input_callback(ROLE);
    check(
        HANDLER,
        Operation::RegisterReceiveCallback,
        ctx.driver.register_receive_callback(ROLE, Some(callback)),
    )?;
    let mac = check(HANDLER, Operation::GetMac, ctx.driver.get_mac(ROLE))?;
    let ip_info = check(HANDLER, Operation::GetIpInfo, ctx.adapter.get_ip_info(ROLE))?;
    check(HANDLER, Operation::Start, ctx.adapter.start(ROLE, mac, &ip_info))?;

    Ok(None)
}

pub(crate) fn on_stop(ctx: &HandlerContext<'_>, _event: &Event) -> DispatchResult<Option<Event>> {
    const HANDLER: &str = "ap_stop";

    check(
        HANDLER,
        Operation::RegisterReceiveCallback,
        ctx.driver.register_receive_callback(ROLE, None),
    )?;
    check(HANDLER, Operation::Stop, ctx.adapter.stop(ROLE))?;

    Ok(None)
}
