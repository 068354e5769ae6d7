//! # Error Types
//!
//! Errors raised while decoding raw driver data into typed events.

use thiserror::Error;

/// A raw event id outside the known ordinal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown event kind: {0}")]
pub struct UnknownEventKind(pub u32);
