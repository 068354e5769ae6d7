//! Domain layer: the dispatch table and the default handler set.
//!
//! Handlers are plain functions over a [`HandlerContext`]. They perform
//! collaborator calls in a fixed order, stop at the first failure, and
//! return at most one derived event instead of sending it themselves.

pub mod access_point;
pub mod registry;
pub mod station;

pub use registry::{DispatchEntry, DispatchOutcome, DispatchRegistry, HandlerContext, HandlerFn};

use crate::error::{CollaboratorError, DispatchError, DispatchResult, Operation};
use crate::LOG_TARGET;
use tracing::error;

/// Unwrap a collaborator result, or log which step of which handler failed
/// and abort the handler.
///
/// Steps already performed are left in place.
pub(crate) fn check<T>(
    handler: &'static str,
    operation: Operation,
    result: Result<T, CollaboratorError>,
) -> DispatchResult<T> {
    result.map_err(|source| {
        error!(
            target: LOG_TARGET,
            handler,
            %operation,
            error = %source,
            "collaborator call failed"
        );
        DispatchError::CollaboratorCallFailed { operation, source }
    })
}
