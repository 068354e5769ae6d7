//! Cross-crate flows over the in-memory bus.

pub mod e2e_lifecycle;
pub mod flows;
